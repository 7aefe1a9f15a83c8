//! Authored demo conversations
//!
//! Turns are stored as `(speaker, message, time)`. Assistant turns are tagged
//! with the script's language when the library is built. The Yoruba and Hausa
//! buyer conversations stop after the shortlist; they were never authored
//! further.

use super::{Persona, Speaker};
use crate::language::Language;

type AuthoredTurn = (Speaker, &'static str, &'static str);

use super::Speaker::{Assistant as A, User as U};

static TRADER_IGBO: &[AuthoredTurn] = &[
    (U, "Achọrọ m itinye akpụkpọ ụkwụ ọhụrụ m", "10:30 AM"),
    (A, "Nnọọ! 👋 Achọpụtara m na ị chọrọ itinye ngwaahịa ọhụrụ. Biko zite foto akpụkpọ ụkwụ ahụ, m ga-enyere gị aka.", "10:30 AM"),
    (U, "[📸 Photo sent]", "10:31 AM"),
    (A, "Mara mma! 👞 Ahụrụ m Men's Leather Oxford. Ego ole ka ị ga-eresị ya?", "10:31 AM"),
    (U, "₦18,000", "10:32 AM"),
    (A, "✅ Ngwaahịa gị anọwo na marketplace! \n\n📦 Men's Leather Oxford\n💰 ₦18,000\n🏷️ Made in Aba\n\nNdi mmadu nwere ike ịhụ ya ugbu a.", "10:32 AM"),
];

static TRADER_ENGLISH: &[AuthoredTurn] = &[
    (U, "I want to list my new shoes", "10:30 AM"),
    (A, "Welcome! 👋 I see you want to list a new product. Please send a photo of the shoes, I'll help you create the listing.", "10:30 AM"),
    (U, "[📸 Photo sent]", "10:31 AM"),
    (A, "Beautiful! 👞 I can see it's a Men's Leather Oxford. What price would you like to set?", "10:31 AM"),
    (U, "₦18,000", "10:32 AM"),
    (A, "✅ Your product is now live on the marketplace!\n\n📦 Men's Leather Oxford\n💰 ₦18,000\n🏷️ Made in Aba\n\nBuyers can see it now.", "10:32 AM"),
];

static TRADER_PIDGIN: &[AuthoredTurn] = &[
    (U, "I wan put my new shoe for sale", "10:30 AM"),
    (A, "How far! 👋 I don see say you wan list product. Abeg send photo of the shoe, I go help you.", "10:30 AM"),
    (U, "[📸 Photo sent]", "10:31 AM"),
    (A, "E fine well well! 👞 Na Men's Leather Oxford I dey see. How much you wan sell am?", "10:31 AM"),
    (U, "₦18,000", "10:32 AM"),
    (A, "✅ Your product don enter marketplace!\n\n📦 Men's Leather Oxford\n💰 ₦18,000\n🏷️ Made in Aba\n\nCustomer fit see am now.", "10:32 AM"),
];

static TRADER_YORUBA: &[AuthoredTurn] = &[
    (U, "Mo fẹ́ fi bàtà tuntun mi sílẹ̀", "10:30 AM"),
    (A, "Ẹ káàbọ̀! 👋 Mo ti rí pé o fẹ́ fi ọjà sílẹ̀. Jọ̀wọ́ fi àwòrán bàtà náà ránṣẹ́.", "10:30 AM"),
    (U, "[📸 Àwòrán]", "10:31 AM"),
    (A, "Ó dára púpọ̀! 👞 Mo rí pé ó jẹ́ Men's Leather Oxford. Iye wo ni o fẹ́ tà á?", "10:31 AM"),
    (U, "₦18,000", "10:32 AM"),
    (A, "✅ Ọjà rẹ ti wà lórí marketplace!\n\n📦 Men's Leather Oxford\n💰 ₦18,000\n🏷️ Made in Aba", "10:32 AM"),
];

static TRADER_HAUSA: &[AuthoredTurn] = &[
    (U, "Ina so in saka sabon takalmi na", "10:30 AM"),
    (A, "Sannu! 👋 Na gani kana son saka kaya. Don Allah aiko hoton takalmin.", "10:30 AM"),
    (U, "[📸 Hoto]", "10:31 AM"),
    (A, "Kyakkyawa! 👞 Ina ganin Men's Leather Oxford ne. Nawa za ka sayar?", "10:31 AM"),
    (U, "₦18,000", "10:32 AM"),
    (A, "✅ Kayan ka yanzu yana kan marketplace!\n\n📦 Men's Leather Oxford\n💰 ₦18,000\n🏷️ Made in Aba", "10:32 AM"),
];

static BUYER_IGBO: &[AuthoredTurn] = &[
    (U, "Achọrọ m akpụkpọ ụkwụ maka agbamakwụkwọ", "2:15 PM"),
    (A, "Nnọọ! 👋 Achọpụtara m akpụkpọ ụkwụ maka agbamakwụkwọ. Enwere anyị ọtụtụ nhọrọ mara mma. Ego ole ka ị nwere?", "2:15 PM"),
    (U, "₦15,000 - ₦25,000", "2:16 PM"),
    (A, "Mara mma! Nke a bụ nhọrọ 3 kachasị mma:\n\n👞 Executive Oxford - ₦18,000 ⭐4.9\n👞 Classic Derby - ₦22,000 ⭐4.8\n👞 Wedding Special - ₦24,500 ⭐5.0\n\nỌ bụrụ nke ị chọrọ ịhụ?", "2:16 PM"),
    (U, "Gosi m Executive Oxford", "2:17 PM"),
    (A, "📦 Executive Oxford\n💰 ₦18,000\n⭐ 4.9 (156 reviews)\n📍 Okechukwu Footwear, Ariaria\n✓ NIN Verified Seller\n🏷️ Made in Aba\n\nỊ chọrọ ịzụta ya? M nwere ike inyere gị aka itinye order.", "2:17 PM"),
];

static BUYER_ENGLISH: &[AuthoredTurn] = &[
    (U, "I need wedding shoes", "2:15 PM"),
    (A, "Welcome! 👋 I found wedding shoes for you. We have many beautiful options. What's your budget?", "2:15 PM"),
    (U, "₦15,000 - ₦25,000", "2:16 PM"),
    (A, "Great! Here are the top 3 options:\n\n👞 Executive Oxford - ₦18,000 ⭐4.9\n👞 Classic Derby - ₦22,000 ⭐4.8\n👞 Wedding Special - ₦24,500 ⭐5.0\n\nWhich one would you like to see?", "2:16 PM"),
    (U, "Show me Executive Oxford", "2:17 PM"),
    (A, "📦 Executive Oxford\n💰 ₦18,000\n⭐ 4.9 (156 reviews)\n📍 Okechukwu Footwear, Ariaria\n✓ NIN Verified Seller\n🏷️ Made in Aba\n\nWould you like to buy it? I can help you place an order.", "2:17 PM"),
];

static BUYER_PIDGIN: &[AuthoredTurn] = &[
    (U, "I need shoe for wedding", "2:15 PM"),
    (A, "How far! 👋 I don find wedding shoe for you. How much you get for pocket?", "2:15 PM"),
    (U, "₦15,000 - ₦25,000", "2:16 PM"),
    (A, "Sharp! See top 3 options wey dey:\n\n👞 Executive Oxford - ₦18,000 ⭐4.9\n👞 Classic Derby - ₦22,000 ⭐4.8\n👞 Wedding Special - ₦24,500 ⭐5.0\n\nWhich one you wan check?", "2:16 PM"),
    (U, "Make I see Executive Oxford", "2:17 PM"),
    (A, "📦 Executive Oxford\n💰 ₦18,000\n⭐ 4.9 (156 reviews)\n📍 Okechukwu Footwear, Ariaria\n✓ NIN Verified Seller\n🏷️ Made in Aba\n\nYou wan buy am? I fit help you order.", "2:17 PM"),
];

static BUYER_YORUBA: &[AuthoredTurn] = &[
    (U, "Mo nílò bàtà fún ìgbéyàwó", "2:15 PM"),
    (A, "Ẹ káàbọ̀! 👋 Mo ti rí bàtà ìgbéyàwó fún ẹ. Owó mélòó ni o ní?", "2:15 PM"),
    (U, "₦15,000 - ₦25,000", "2:16 PM"),
    (A, "Ó dára! Èyí ni àwọn 3 tí ó dára jùlọ:\n\n👞 Executive Oxford - ₦18,000 ⭐4.9\n👞 Classic Derby - ₦22,000 ⭐4.8\n👞 Wedding Special - ₦24,500 ⭐5.0", "2:16 PM"),
];

static BUYER_HAUSA: &[AuthoredTurn] = &[
    (U, "Ina bukatar takalmi na aure", "2:15 PM"),
    (A, "Sannu! 👋 Na samu takalmin aure. Nawa kake da shi?", "2:15 PM"),
    (U, "₦15,000 - ₦25,000", "2:16 PM"),
    (A, "Kyau! Ga mafi kyau 3:\n\n👞 Executive Oxford - ₦18,000 ⭐4.9\n👞 Classic Derby - ₦22,000 ⭐4.8\n👞 Wedding Special - ₦24,500 ⭐5.0", "2:16 PM"),
];

/// Every authored (persona, language) conversation
pub(super) fn authored() -> [(Persona, Language, &'static [AuthoredTurn]); 10] {
    [
        (Persona::Trader, Language::Igbo, TRADER_IGBO),
        (Persona::Trader, Language::English, TRADER_ENGLISH),
        (Persona::Trader, Language::Pidgin, TRADER_PIDGIN),
        (Persona::Trader, Language::Yoruba, TRADER_YORUBA),
        (Persona::Trader, Language::Hausa, TRADER_HAUSA),
        (Persona::Buyer, Language::Igbo, BUYER_IGBO),
        (Persona::Buyer, Language::English, BUYER_ENGLISH),
        (Persona::Buyer, Language::Pidgin, BUYER_PIDGIN),
        (Persona::Buyer, Language::Yoruba, BUYER_YORUBA),
        (Persona::Buyer, Language::Hausa, BUYER_HAUSA),
    ]
}
