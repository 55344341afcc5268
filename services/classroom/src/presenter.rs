//! Defines what a classroom session reports and how it reaches the user.

use anyhow::Result;
use async_trait::async_trait;
use classroom_core::{
    StudentResponse, Subject,
    curriculum::{CurriculumService, StaticCurriculum},
    persona::Prosody,
    rewards::Progress,
};
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Everything that happens during a session, in delivery order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// The session began.
    Started {
        subject: Subject,
        chapter: Option<String>,
        target_minutes: u32,
    },
    /// A finished teacher utterance.
    Teacher { text: String },
    /// A student speaks, with a hint for speech synthesis.
    Student {
        response: StudentResponse,
        prosody: Prosody,
    },
    /// Elapsed and remaining teaching time, as `MM:SS`.
    Clock { elapsed: String, remaining: String },
    /// The target duration was reached and the reward was claimed.
    Completed {
        coins: u64,
        experience: u64,
        new_title: Option<String>,
        progress: Progress,
    },
    /// Input ended before the target duration.
    EndedEarly { elapsed: String },
}

/// Delivers session events to the user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Presenter: Send {
    async fn present(&mut self, event: SessionEvent) -> Result<()>;
}

/// Writes events to a terminal, either as readable text or as JSON lines.
pub struct ConsolePresenter<W> {
    out: W,
    json: bool,
}

impl<W: AsyncWrite + Unpin + Send> ConsolePresenter<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> Presenter for ConsolePresenter<W> {
    async fn present(&mut self, event: SessionEvent) -> Result<()> {
        let line = if self.json {
            serde_json::to_string(&event)?
        } else {
            render_event(&event)
        };
        self.out.write_all(line.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await?;
        Ok(())
    }
}

fn render_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::Started {
            subject,
            chapter,
            target_minutes,
        } => match chapter {
            Some(chapter) => format!(
                "Class is in session: {subject} / {chapter} for {target_minutes} minutes. Start teaching!"
            ),
            None => format!(
                "Class is in session: {subject} for {target_minutes} minutes. Start teaching!"
            ),
        },
        SessionEvent::Teacher { text } => format!("🧑‍🏫 You: {text}"),
        SessionEvent::Student { response, .. } => format!(
            "{} {}: {}",
            response.avatar, response.student_name, response.content
        ),
        SessionEvent::Clock { elapsed, remaining } => {
            format!("⏱  {elapsed} elapsed, {remaining} remaining")
        }
        SessionEvent::Completed {
            coins,
            experience,
            new_title,
            ..
        } => {
            let mut text = format!("🎉 Session complete! +{coins} coins, +{experience} XP");
            if let Some(title) = new_title {
                text.push_str(&format!("\n🏆 New title unlocked: {title}"));
            }
            text
        }
        SessionEvent::EndedEarly { elapsed } => {
            format!("Session ended after {elapsed}; finish a full session to earn rewards.")
        }
    }
}

/// A summary of accumulated progress for the `progress` command.
pub fn render_progress(progress: &Progress) -> String {
    let title = progress.title();
    let mut lines = vec![
        format!("{} {}", title.icon, title.name),
        format!(
            "Teaching level {} ({}/100 XP)",
            progress.level(),
            progress.level_progress()
        ),
        format!(
            "Coins: {}  Experience: {}",
            progress.total_coins, progress.total_experience
        ),
    ];
    match (progress.next_title(), progress.coins_to_next_title()) {
        (Some(next), Some(missing)) => lines.push(format!(
            "{missing} coins to unlock {} {} ({:.0}%)",
            next.icon,
            next.name,
            progress.title_progress_percent()
        )),
        _ => lines.push("Maximum title achieved! You are a true teaching legend!".to_string()),
    }
    lines.join("\n")
}

/// The chapter list for the `chapters` command.
pub fn render_chapters(subject: Subject) -> String {
    StaticCurriculum
        .chapters(subject)
        .iter()
        .map(|chapter| {
            format!(
                "{:<34} {:<40} {:?}, {}% of exam, {} topics",
                chapter.key,
                chapter.name,
                chapter.difficulty,
                chapter.exam_weight,
                chapter.topics.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
