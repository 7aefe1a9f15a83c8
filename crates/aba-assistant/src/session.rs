//! Demo session controller
//!
//! A [`DemoSession`] owns the state of one demo screen: the selected language
//! and persona, the last submitted query and its output. Submitting a query
//! moves the session to [`Phase::Processing`] and schedules a deferred task
//! that answers after a fixed "thinking" delay.
//!
//! Submissions are last-write-wins. Each one bumps a generation counter and
//! aborts the task still waiting for the previous one; a task only publishes
//! when its generation is current, so a superseded output never reaches
//! subscribers.
//!
//! State lives in a [`tokio::sync::watch`] channel, so a presentation layer
//! can [`subscribe`](DemoSession::subscribe) and re-render on every change.

use crate::chat::{ConversationScript, Persona, ScriptLibrary};
use crate::error::{AssistantError, Result};
use crate::language::Language;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

/// A submitted query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub id: Uuid,
    /// Trimmed query text
    pub text: String,
    /// Language selected when the query was submitted
    pub language: Language,
    pub submitted_at: DateTime<Utc>,
}

impl Query {
    /// Build a query from raw input
    ///
    /// Returns [`AssistantError::EmptyQuery`] for blank input.
    pub fn new(raw: &str, language: Language) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(AssistantError::EmptyQuery);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            language,
            submitted_at: Utc::now(),
        })
    }
}

/// Something that answers queries for a [`DemoSession`]
pub trait Responder: Send + Sync + 'static {
    type Output: Clone + fmt::Debug + Send + Sync + 'static;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Answer a query
    fn respond(&self, query: &Query) -> Self::Output;
}

/// Where a session is in the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Nothing submitted yet (or reset)
    #[default]
    Idle,
    /// Waiting for the deferred answer
    Processing,
    /// The last query has been answered
    Settled,
}

/// Immutable view of a session's state
#[derive(Debug, Clone)]
pub struct SessionSnapshot<T> {
    pub language: Language,
    pub persona: Option<Persona>,
    pub phase: Phase,
    /// Last accepted query
    pub query: Option<Query>,
    /// Output for `query`, once settled
    pub output: Option<Arc<T>>,
    generation: u64,
}

impl<T> SessionSnapshot<T> {
    fn initial(language: Language) -> Self {
        Self {
            language,
            persona: None,
            phase: Phase::Idle,
            query: None,
            output: None,
            generation: 0,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    /// Counter bumped by every accepted submission and by reset
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One demo screen's session
///
/// Submitting requires a running tokio runtime.
pub struct DemoSession<R: Responder> {
    responder: Arc<R>,
    delay: Duration,
    initial_language: Language,
    state: watch::Sender<SessionSnapshot<R::Output>>,
    pending: Option<JoinHandle<()>>,
}

impl<R: Responder> DemoSession<R> {
    /// Create a session answering through `responder` after `delay`
    pub fn new(responder: Arc<R>, delay: Duration, language: Language) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::initial(language));
        Self {
            responder,
            delay,
            initial_language: language,
            state,
            pending: None,
        }
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current state
    pub fn snapshot(&self) -> SessionSnapshot<R::Output> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot<R::Output>> {
        self.state.subscribe()
    }

    pub fn language(&self) -> Language {
        self.state.borrow().language
    }

    pub fn persona(&self) -> Option<Persona> {
        self.state.borrow().persona
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn is_processing(&self) -> bool {
        self.state.borrow().is_processing()
    }

    /// Output of the last settled query
    pub fn output(&self) -> Option<Arc<R::Output>> {
        self.state.borrow().output.clone()
    }

    /// Switch the language used for later submissions
    ///
    /// A displayed output keeps the language it was produced in.
    pub fn select_language(&self, language: Language) {
        self.state.send_if_modified(|s| {
            if s.language == language {
                return false;
            }
            s.language = language;
            true
        });
    }

    /// Select the chat persona (`None` leaves chat mode)
    pub fn select_persona(&self, persona: Option<Persona>) {
        self.state.send_if_modified(|s| {
            if s.persona == persona {
                return false;
            }
            s.persona = persona;
            true
        });
    }

    /// Script for the selected persona and language
    pub fn current_script(&self, library: &ScriptLibrary) -> Option<ConversationScript> {
        let state = self.state.borrow();
        state
            .persona
            .map(|persona| library.get_script(persona, state.language))
    }

    /// Submit a query
    ///
    /// Blank input is rejected with [`AssistantError::EmptyQuery`] and leaves
    /// the session untouched. Otherwise any pending answer is cancelled and
    /// the session enters [`Phase::Processing`] until the new answer is ready.
    pub fn submit_query(&mut self, raw: &str) -> Result<Query> {
        let query = Query::new(raw, self.language())?;

        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                debug!(responder = self.responder.name(), "Superseding pending query");
            }
            handle.abort();
        }

        let mut generation = 0;
        self.state.send_modify(|s| {
            s.generation += 1;
            generation = s.generation;
            s.phase = Phase::Processing;
            s.query = Some(query.clone());
            s.output = None;
        });

        debug!(
            responder = self.responder.name(),
            query_id = %query.id,
            language = %query.language.code(),
            generation,
            "Query submitted"
        );

        let responder = Arc::clone(&self.responder);
        let state = self.state.clone();
        let delay = self.delay;
        let submitted = query.clone();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let output = Arc::new(responder.respond(&submitted));

            let published = state.send_if_modified(|s| {
                if s.generation != generation {
                    return false;
                }
                s.phase = Phase::Settled;
                s.output = Some(output);
                true
            });

            if published {
                info!(
                    responder = responder.name(),
                    query_id = %submitted.id,
                    "Query settled"
                );
            } else {
                debug!(query_id = %submitted.id, "Dropping stale answer");
            }
        }));

        Ok(query)
    }

    /// Wait until the current submission settles
    ///
    /// Returns immediately with the current output when nothing is pending,
    /// and `None` if the session is reset while waiting.
    pub async fn settled(&self) -> Option<Arc<R::Output>> {
        let mut rx = self.state.subscribe();
        let output = rx
            .wait_for(|s| s.phase != Phase::Processing)
            .await
            .ok()?
            .output
            .clone();
        output
    }

    /// Cancel pending work and return to the initial state
    pub fn reset(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let language = self.initial_language;
        self.state.send_modify(|s| {
            let generation = s.generation + 1;
            *s = SessionSnapshot::initial(language);
            s.generation = generation;
        });
    }
}

impl<R: Responder> Drop for DemoSession<R> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<R: Responder> fmt::Debug for DemoSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("DemoSession")
            .field("responder", &self.responder.name())
            .field("delay", &self.delay)
            .field("language", &state.language)
            .field("phase", &state.phase)
            .field("generation", &state.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Echoes the query text and counts calls
    #[derive(Default)]
    struct Echo {
        calls: AtomicUsize,
    }

    impl Responder for Echo {
        type Output = String;

        fn name(&self) -> &'static str {
            "echo"
        }

        fn respond(&self, query: &Query) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("{}:{}", query.language.code(), query.text)
        }
    }

    const DELAY: Duration = Duration::from_millis(1200);

    fn session() -> (Arc<Echo>, DemoSession<Echo>) {
        let echo = Arc::new(Echo::default());
        let session = DemoSession::new(Arc::clone(&echo), DELAY, Language::English);
        (echo, session)
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_settles_after_delay() {
        let (_, mut session) = session();
        let query = session.submit_query("  leather bags  ").unwrap();
        assert_eq!(query.text, "leather bags");
        assert!(session.is_processing());
        assert!(session.output().is_none());

        tokio::time::advance(Duration::from_millis(1100)).await;
        tokio::task::yield_now().await;
        assert!(session.is_processing());

        let output = session.settled().await.unwrap();
        assert_eq!(output.as_str(), "english:leather bags");
        assert_eq!(session.phase(), Phase::Settled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_supersedes_pending_query() {
        let (echo, mut session) = session();
        let mut rx = session.subscribe();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = {
            let seen = Arc::clone(&seen);
            tokio::spawn(async move {
                while rx.changed().await.is_ok() {
                    let output = rx.borrow_and_update().output.clone();
                    if let Some(output) = output {
                        seen.lock().unwrap().push(output.as_str().to_string());
                    }
                }
            })
        };

        session.submit_query("query A").unwrap();
        tokio::time::advance(Duration::from_millis(600)).await;
        session.submit_query("query B").unwrap();

        // A's original deadline passes while B is still pending
        tokio::time::advance(Duration::from_millis(700)).await;
        tokio::task::yield_now().await;
        assert!(session.is_processing());
        assert!(session.output().is_none());

        let output = session.settled().await.unwrap();
        assert_eq!(output.as_str(), "english:query B");
        assert_eq!(echo.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.snapshot().generation(), 2);

        tokio::task::yield_now().await;
        drop(session);
        recorder.await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["english:query B".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_is_rejected() {
        let (echo, mut session) = session();
        let err = session.submit_query("   ").unwrap_err();
        assert!(matches!(err, AssistantError::EmptyQuery));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_processing());
        assert!(session.output().is_none());
        assert_eq!(session.snapshot().generation(), 0);

        tokio::time::advance(DELAY * 2).await;
        assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_query_keeps_settled_output() {
        let (_, mut session) = session();
        session.submit_query("bags").unwrap();
        session.settled().await.unwrap();

        assert!(session.submit_query("").is_err());
        assert_eq!(session.phase(), Phase::Settled);
        assert!(session.output().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_keeps_language_at_submission() {
        let (_, mut session) = session();
        session.submit_query("akpa").unwrap();
        session.select_language(Language::Igbo);

        let output = session.settled().await.unwrap();
        assert_eq!(output.as_str(), "english:akpa");
        assert_eq!(session.language(), Language::Igbo);
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_change_keeps_output() {
        let (_, mut session) = session();
        session.submit_query("wedding shoes").unwrap();
        let before = session.settled().await.unwrap();

        session.select_language(Language::Hausa);
        let after = session.output().unwrap();
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(session.phase(), Phase::Settled);

        session.submit_query("wedding shoes").unwrap();
        let output = session.settled().await.unwrap();
        assert_eq!(output.as_str(), "hausa:wedding shoes");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending() {
        let (echo, mut session) = session();
        session.select_persona(Some(Persona::Buyer));
        session.submit_query("bulk").unwrap();
        session.reset();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::Idle);
        assert_eq!(snapshot.persona, None);
        assert!(snapshot.query.is_none());

        tokio::time::advance(DELAY * 2).await;
        tokio::task::yield_now().await;
        assert!(session.output().is_none());
        assert_eq!(echo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settled_when_idle_returns_none() {
        let (_, session) = session();
        assert!(session.settled().await.is_none());
    }

    #[test]
    fn test_current_script_follows_selection() {
        let echo = Arc::new(Echo::default());
        let session = DemoSession::new(echo, DELAY, Language::Igbo);
        let library = ScriptLibrary::builtin();
        assert!(session.current_script(&library).is_none());

        session.select_persona(Some(Persona::Trader));
        let script = session.current_script(&library).unwrap();
        assert_eq!(script.served, Language::Igbo);
        assert_eq!(script.persona, Persona::Trader);

        session.select_language(Language::Yoruba);
        session.select_persona(Some(Persona::Buyer));
        assert_eq!(session.current_script(&library).unwrap().len(), 4);

        session.select_persona(None);
        assert!(session.current_script(&library).is_none());
    }
}
