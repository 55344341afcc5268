//! Runs one timed teaching session against the simulated class.

use crate::{
    presenter::{Presenter, SessionEvent},
    store::ProgressStore,
};
use anyhow::{Context, Result};
use classroom_core::{
    ResponseSelector, StudentResponse, Subject,
    random::RandomSource,
    rewards::{Progress, SessionLength, SessionReward, Title},
    timer::{TeachingTimer, format_clock},
    transcript::{FlushHint, TranscriptChunker},
};
use std::{collections::VecDeque, time::Duration};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    time::{Instant, sleep_until},
};
use tracing::{debug, info, instrument, warn};

/// Fixed parameters of a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub subject: Subject,
    pub chapter: Option<String>,
    pub length: &'static SessionLength,
    /// Delay between an utterance and its first answer, and between answers.
    pub pacing: Duration,
    /// Pause that ends an unpunctuated utterance.
    pub silence: Duration,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    Completed {
        reward: SessionReward,
        new_title: Option<&'static Title>,
        progress: Progress,
    },
    EndedEarly {
        elapsed: Duration,
    },
}

/// A student answer waiting for its delivery time.
#[derive(Debug)]
struct ScheduledAnswer {
    due: Instant,
    response: StudentResponse,
}

pub struct ClassroomSession<R, P> {
    settings: SessionSettings,
    selector: ResponseSelector<R>,
    presenter: P,
    store: ProgressStore,
    chunker: TranscriptChunker,
    timer: TeachingTimer,
    /// Sorted by `due`; answers with equal times keep scheduling order.
    answers: VecDeque<ScheduledAnswer>,
}

impl<R: RandomSource + Send, P: Presenter> ClassroomSession<R, P> {
    pub fn new(
        settings: SessionSettings,
        selector: ResponseSelector<R>,
        presenter: P,
        store: ProgressStore,
    ) -> Self {
        let timer = TeachingTimer::new(settings.length.duration());
        Self {
            settings,
            selector,
            presenter,
            store,
            chunker: TranscriptChunker::new(),
            timer,
            answers: VecDeque::new(),
        }
    }

    /// Reads teacher speech line by line until the target duration is reached
    /// or the input ends.
    ///
    /// Each line is a final recognised phrase. A chunk is processed as soon as
    /// a phrase ends a sentence, or once no further phrase arrives within the
    /// silence window. Answers are delivered on their own schedule while the
    /// teacher keeps talking.
    #[instrument(name = "classroom_session", skip_all, fields(subject = %self.settings.subject))]
    pub async fn run<I>(mut self, input: I) -> Result<SessionOutcome>
    where
        I: AsyncBufRead + Unpin + Send,
    {
        info!(
            minutes = self.settings.length.minutes,
            chapter = ?self.settings.chapter,
            "Session started"
        );
        self.presenter
            .present(SessionEvent::Started {
                subject: self.settings.subject,
                chapter: self.settings.chapter.clone(),
                target_minutes: self.settings.length.minutes,
            })
            .await?;

        let mut lines = input.lines();
        let mut last_tick = Instant::now();
        let mut silence_deadline: Option<Instant> = None;

        loop {
            let session_end = Instant::now() + self.timer.remaining();
            let input_deadline = silence_deadline.map_or(session_end, |d| d.min(session_end));
            let next_answer = self.answers.front().map(|answer| answer.due);

            tokio::select! {
                biased;

                _ = sleep_until(next_answer.unwrap_or(input_deadline)), if next_answer.is_some() => {
                    self.deliver_due().await?;
                }
                line = lines.next_line() => match line.context("Failed to read teacher input")? {
                    Some(phrase) => match self.chunker.push_final(&phrase) {
                        FlushHint::Immediate => {
                            silence_deadline = None;
                            self.flush().await?;
                        }
                        FlushHint::AfterSilence => {
                            silence_deadline = Some(Instant::now() + self.settings.silence);
                        }
                    },
                    None => {
                        if let Some(leftover) = self.chunker.finish() {
                            self.respond(leftover).await?;
                        }
                        self.deliver_all().await?;
                        self.tick(&mut last_tick);
                        if self.timer.is_complete() {
                            return self.complete().await;
                        }
                        return self.end_early().await;
                    }
                },
                _ = sleep_until(input_deadline) => {
                    debug!("Silence detected");
                    silence_deadline = None;
                    self.flush().await?;
                }
            }

            if self.tick(&mut last_tick) {
                self.deliver_all().await?;
                return self.complete().await;
            }
        }
    }

    fn tick(&mut self, last_tick: &mut Instant) -> bool {
        let now = Instant::now();
        let complete = self.timer.advance(now - *last_tick);
        *last_tick = now;
        complete
    }

    async fn flush(&mut self) -> Result<()> {
        match self.chunker.take() {
            Some(chunk) => self.respond(chunk).await,
            None => Ok(()),
        }
    }

    /// Hands one utterance to the class and schedules its answers, the
    /// `i`-th one `(i + 1) * pacing` after the utterance.
    async fn respond(&mut self, utterance: String) -> Result<()> {
        let responses = self
            .selector
            .generate_responses(&utterance, self.settings.subject.key());
        debug!(
            chars = utterance.chars().count(),
            responses = responses.len(),
            "Utterance processed"
        );

        self.presenter
            .present(SessionEvent::Teacher { text: utterance })
            .await?;

        let mut due = Instant::now();
        for response in responses {
            due += self.settings.pacing;
            let at = self.answers.partition_point(|answer| answer.due <= due);
            self.answers.insert(at, ScheduledAnswer { due, response });
        }

        self.presenter
            .present(SessionEvent::Clock {
                elapsed: format_clock(self.timer.elapsed()),
                remaining: format_clock(self.timer.remaining()),
            })
            .await
    }

    /// Delivers every answer whose time has come.
    async fn deliver_due(&mut self) -> Result<()> {
        let now = Instant::now();
        while self.answers.front().is_some_and(|answer| answer.due <= now) {
            if let Some(answer) = self.answers.pop_front() {
                self.deliver(answer.response).await?;
            }
        }
        Ok(())
    }

    /// Waits out and delivers everything still scheduled.
    async fn deliver_all(&mut self) -> Result<()> {
        while let Some(answer) = self.answers.pop_front() {
            sleep_until(answer.due).await;
            self.deliver(answer.response).await?;
        }
        Ok(())
    }

    async fn deliver(&mut self, response: StudentResponse) -> Result<()> {
        let prosody = response.voice_type.prosody();
        self.presenter
            .present(SessionEvent::Student { response, prosody })
            .await
    }

    async fn complete(mut self) -> Result<SessionOutcome> {
        let reward = self.settings.length.reward;
        let mut progress = self
            .store
            .load()
            .await
            .context("Failed to load progress")?;
        let new_title = progress.claim(reward);
        self.store
            .save(&progress)
            .await
            .context("Failed to save progress")?;

        info!(
            coins = reward.coins,
            experience = reward.experience,
            title = %progress.current_title,
            "Session completed"
        );
        self.presenter
            .present(SessionEvent::Completed {
                coins: reward.coins,
                experience: reward.experience,
                new_title: new_title.map(|title| title.name.to_string()),
                progress: progress.clone(),
            })
            .await?;

        Ok(SessionOutcome::Completed {
            reward,
            new_title,
            progress,
        })
    }

    async fn end_early(mut self) -> Result<SessionOutcome> {
        let elapsed = self.timer.elapsed();
        warn!(elapsed = %format_clock(elapsed), "Input ended before the session target");
        self.presenter
            .present(SessionEvent::EndedEarly {
                elapsed: format_clock(elapsed),
            })
            .await?;
        Ok(SessionOutcome::EndedEarly { elapsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::MockPresenter;
    use classroom_core::random::{RngSource, StdRngSource};
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncWriteExt, BufReader};

    type Recorded = Arc<Mutex<Vec<(Duration, SessionEvent)>>>;

    fn settings(minutes: u32) -> SessionSettings {
        SessionSettings {
            subject: Subject::Physics,
            chapter: Some("mechanics".to_string()),
            length: SessionLength::for_minutes(minutes).unwrap(),
            pacing: Duration::from_secs(2),
            silence: Duration::from_millis(1200),
        }
    }

    /// Records each event with its offset from the presenter's creation.
    fn recording_presenter() -> (MockPresenter, Recorded) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let start = Instant::now();
        let mut presenter = MockPresenter::new();
        presenter.expect_present().returning(move |event| {
            sink.lock().unwrap().push((start.elapsed(), event));
            Ok(())
        });
        (presenter, events)
    }

    fn events_of(recorded: &Recorded) -> Vec<SessionEvent> {
        recorded
            .lock()
            .unwrap()
            .iter()
            .map(|(_, event)| event.clone())
            .collect()
    }

    fn session(
        minutes: u32,
        presenter: MockPresenter,
        store: ProgressStore,
    ) -> ClassroomSession<StdRngSource, MockPresenter> {
        ClassroomSession::new(
            settings(minutes),
            ResponseSelector::new(RngSource::seeded(7)),
            presenter,
            store,
        )
    }

    fn student_count(events: &[SessionEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Student { .. }))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_sentence_is_answered_then_input_ends_early() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));
        let (presenter, recorded) = recording_presenter();

        let input: &[u8] = b"Today we discuss torque about a fixed axis.\n";
        let outcome = session(15, presenter, store.clone()).run(input).await.unwrap();

        // The session waits for the last scheduled answer before ending.
        let SessionOutcome::EndedEarly { elapsed } = outcome else {
            panic!("expected early end, got {outcome:?}");
        };
        assert!(elapsed >= Duration::from_secs(4));

        let events = events_of(&recorded);
        assert!(matches!(events[0], SessionEvent::Started { target_minutes: 15, .. }));
        assert_eq!(
            events[1],
            SessionEvent::Teacher {
                text: "Today we discuss torque about a fixed axis.".to_string()
            }
        );
        assert!((2..=3).contains(&student_count(&events)));
        assert!(matches!(events.last(), Some(SessionEvent::EndedEarly { .. })));

        // No reward is written for an unfinished session.
        assert!(!store.path().exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_answers_arrive_at_paced_offsets_while_teacher_continues() {
        let dir = tempfile::tempdir().unwrap();
        let (presenter, recorded) = recording_presenter();

        let input: &[u8] = b"Today we discuss torque about a fixed axis.\n\
            Angular momentum is conserved when no external torque acts.\n";
        session(15, presenter, ProgressStore::new(dir.path().join("p.json")))
            .run(input)
            .await
            .unwrap();

        let recorded = recorded.lock().unwrap();
        let teacher_times: Vec<_> = recorded
            .iter()
            .filter(|(_, e)| matches!(e, SessionEvent::Teacher { .. }))
            .map(|(at, _)| *at)
            .collect();
        assert_eq!(teacher_times, vec![Duration::ZERO, Duration::ZERO]);

        let student_times: Vec<_> = recorded
            .iter()
            .filter(|(_, e)| matches!(e, SessionEvent::Student { .. }))
            .map(|(at, _)| *at)
            .collect();
        assert!(student_times.len() >= 4);
        assert_eq!(
            &student_times[..4],
            &[
                Duration::from_secs(2),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(4)
            ]
        );
        let allowed = [2, 4, 6].map(Duration::from_secs);
        assert!(student_times.iter().all(|at| allowed.contains(at)));
        assert!(student_times.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_filler_gets_no_answers() {
        let dir = tempfile::tempdir().unwrap();
        let (presenter, recorded) = recording_presenter();

        let input: &[u8] = b"Good morning everyone.\n";
        session(15, presenter, ProgressStore::new(dir.path().join("p.json")))
            .run(input)
            .await
            .unwrap();

        assert_eq!(student_count(&events_of(&recorded)), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_silence_flushes_unpunctuated_speech() {
        let dir = tempfile::tempdir().unwrap();
        let (presenter, recorded) = recording_presenter();
        let (mut writer, reader) = tokio::io::duplex(256);
        writer
            .write_all(b"so the moment of inertia depends on how mass is spread\n")
            .await
            .unwrap();

        let outcome = session(15, presenter, ProgressStore::new(dir.path().join("p.json")))
            .run(BufReader::new(reader))
            .await
            .unwrap();
        drop(writer);

        assert!(matches!(outcome, SessionOutcome::Completed { .. }));
        let recorded = recorded.lock().unwrap();
        let (spoken_at, _) = recorded
            .iter()
            .find(|(_, e)| matches!(e, SessionEvent::Teacher { .. }))
            .unwrap();
        assert_eq!(*spoken_at, Duration::from_millis(1200));

        let events: Vec<_> = recorded.iter().map(|(_, e)| e.clone()).collect();
        assert!(events.contains(&SessionEvent::Teacher {
            text: "so the moment of inertia depends on how mass is spread".to_string()
        }));
        assert!(student_count(&events) >= 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_session_claims_reward() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProgressStore::new(dir.path().join("progress.json"));
        store
            .save(&Progress {
                total_coins: 80,
                total_experience: 40,
                current_title: "Beginner".to_string(),
            })
            .await
            .unwrap();
        let (presenter, recorded) = recording_presenter();
        let (_writer, reader) = tokio::io::duplex(64);

        let outcome = session(30, presenter, store.clone())
            .run(BufReader::new(reader))
            .await
            .unwrap();

        let SessionOutcome::Completed {
            reward,
            new_title,
            progress,
        } = outcome
        else {
            panic!("expected completion, got {outcome:?}");
        };
        assert_eq!(reward, SessionReward { coins: 25, experience: 50 });
        assert_eq!(new_title.map(|t| t.name), Some("Student"));
        assert_eq!(progress.total_coins, 105);
        assert_eq!(store.load().await.unwrap(), progress);

        let events = events_of(&recorded);
        assert!(matches!(
            events.last(),
            Some(SessionEvent::Completed { coins: 25, experience: 50, .. })
        ));
    }
}
