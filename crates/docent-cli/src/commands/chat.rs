//! Interactive chat on stdin.
//!
//! Each question shows a thinking spinner for the configured delay, then the
//! answer is revealed character by character. Ctrl-C while an answer is
//! pending cancels it; Ctrl-C at the prompt ends the chat.

use std::io::Write as _;
use std::time::Duration;

use anyhow::Context;
use docent_config::DocentConfig;
use docent_core::enums::Role;
use docent_core::responses::AskResponse;
use docent_match::welcome::GUIDED_QUESTIONS;
use docent_session::{AnswerSet, ChatSession, Delivery, Recorder, Responder};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio_util::sync::CancellationToken;

use crate::cli::root_commands::ChatArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::parse_enum;
use crate::commands::shared::role::optional_role;
use crate::commands::shared::session::open_session;
use crate::output::answer::{
    render_answer, render_badges, render_body, render_footer, render_message,
};
use crate::output::output_with;
use crate::progress::Progress;

type Input = Lines<BufReader<Stdin>>;

const HELP: &str = "Commands: /role <designer|developer|guardian>, /reset, /book, /unhelpful, /record, /help, /quit";

/// One line typed at the chat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatInput {
    Empty,
    Quit,
    Help,
    Reset,
    Book,
    Unhelpful,
    Record,
    Role(String),
    Ask(String),
    Unknown(String),
}

/// Interpret a prompt line. While starter questions are on offer, their
/// number picks them.
fn parse_input(line: &str, suggestions: &[String]) -> ChatInput {
    let line = line.trim();
    if line.is_empty() {
        return ChatInput::Empty;
    }

    if let Some(command) = line.strip_prefix('/') {
        let (name, rest) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
        return match name.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => ChatInput::Quit,
            "help" | "?" => ChatInput::Help,
            "reset" => ChatInput::Reset,
            "book" => ChatInput::Book,
            "unhelpful" => ChatInput::Unhelpful,
            "record" => ChatInput::Record,
            "role" => ChatInput::Role(rest.trim().to_string()),
            _ => ChatInput::Unknown(line.to_string()),
        };
    }

    if let Ok(pick) = line.parse::<usize>() {
        if let Some(question) = pick.checked_sub(1).and_then(|index| suggestions.get(index)) {
            return ChatInput::Ask(question.clone());
        }
    }

    ChatInput::Ask(line.to_string())
}

struct Chat<'a> {
    session: ChatSession,
    responder: Responder,
    flags: &'a GlobalFlags,
    stream: bool,
    hub: bool,
}

pub async fn handle(args: &ChatArgs, config: &DocentConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = open_session(config);
    if args.fresh {
        session.forget();
    }

    let role = optional_role(args.role.as_deref())?
        .or_else(|| session.role())
        .or(config.chat.default_role)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no role given; pass --role designer|developer|guardian or set chat.default_role"
            )
        })?;
    session.select_role(role)?;
    if session.history().is_empty() {
        session.reset()?;
    }

    let answers = if args.hub {
        AnswerSet::Hub
    } else {
        AnswerSet::Catalog
    };
    let mut chat = Chat {
        session,
        responder: Responder::from_config(&config.chat).with_answers(answers),
        flags,
        stream: config.chat.stream && flags.format == OutputFormat::Table,
        hub: args.hub,
    };

    chat.print_transcript();
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt()?;
        let Some(line) = read_line(&mut input).await? else {
            break;
        };

        match parse_input(&line, chat.session.suggestions()) {
            ChatInput::Empty => {}
            ChatInput::Quit => break,
            ChatInput::Help => println!("{HELP}"),
            ChatInput::Reset => {
                chat.session.reset()?;
                chat.print_transcript();
            }
            ChatInput::Role(raw) => chat.switch_role(&raw)?,
            ChatInput::Book => chat.book(),
            ChatInput::Unhelpful => chat.escalate(),
            ChatInput::Record => chat.record(&mut input).await?,
            ChatInput::Unknown(command) => println!("Unknown command {command}. {HELP}"),
            ChatInput::Ask(question) => chat.ask(&question).await?,
        }
    }

    tracing::debug!(messages = chat.session.history().len(), "chat ended");
    Ok(())
}

impl Chat<'_> {
    fn role(&self) -> anyhow::Result<Role> {
        self.session.role().context("no role selected")
    }

    fn print_transcript(&self) {
        if self.flags.format != OutputFormat::Table {
            return;
        }
        for message in self.session.history() {
            println!("{}\n", render_message(message));
        }
        self.print_suggestions();
        println!("{HELP}");
    }

    fn print_suggestions(&self) {
        let suggestions = self.session.suggestions();
        if suggestions.is_empty() {
            return;
        }
        println!("Try asking (type the number):");
        for (index, question) in suggestions.iter().enumerate() {
            println!("  {}. {question}", index + 1);
        }
        if self.hub {
            println!("Guided questions:");
            for question in GUIDED_QUESTIONS {
                println!("  - {question}");
            }
        }
        println!();
    }

    fn switch_role(&mut self, raw: &str) -> anyhow::Result<()> {
        let role = match parse_enum::<Role>(raw, "role") {
            Ok(role) => role,
            Err(error) => {
                println!("{error}");
                return Ok(());
            }
        };
        if self.session.select_role(role)? {
            self.print_transcript();
        } else {
            println!("Already chatting as {}.", role.label());
        }
        Ok(())
    }

    fn book(&mut self) {
        let Some(id) = self.session.last_assistant_id().map(ToString::to_string) else {
            println!("Nothing to book office hours for yet.");
            return;
        };
        match self.session.request_booking(&id) {
            Ok(()) => println!("Office hours requested. A guardian will follow up."),
            Err(error) => println!("Cannot book office hours: {error}"),
        }
    }

    fn escalate(&self) {
        println!("Sorry that did not help. You can:");
        for (index, option) in self.session.escalation_options().iter().enumerate() {
            println!("  {}. {option}", index + 1);
        }
    }

    async fn ask(&mut self, question: &str) -> anyhow::Result<()> {
        let role = self.role()?;
        self.session.push_user(question)?;

        let token = self.session.delivery_token();
        let watcher = cancel_on_interrupt(&token);

        let spinner = Progress::spinner("Docent is thinking…");
        let delivery = self.responder.respond(question, role, &token).await;
        spinner.finish_clear();

        let Delivery::Completed(response) = delivery else {
            watcher.abort();
            println!("(cancelled)");
            return Ok(());
        };

        if self.stream {
            let badges = render_badges(&response.trust_badges);
            if !badges.is_empty() {
                println!("{badges}\n");
            }
            let body = render_body(&response.content);
            let mut shown = 0;
            let completed = self
                .responder
                .stream(&body, &token, |prefix| {
                    print!("{}", &prefix[shown..]);
                    shown = prefix.len();
                    let _ = std::io::stdout().flush();
                })
                .await;
            println!();
            if !completed {
                watcher.abort();
                println!("(stopped)");
                return Ok(());
            }
            let footer = render_footer(&response);
            if !footer.is_empty() {
                println!("\n{footer}");
            }
            println!();
        } else {
            let ask = AskResponse {
                role,
                query: question.to_string(),
                response: response.clone(),
            };
            output_with(&ask, self.flags.format, |ask| render_answer(&ask.response))?;
        }
        watcher.abort();

        self.session.push_assistant(&response)?;
        Ok(())
    }

    /// Guardian video answer: Enter starts, Enter stops, then send or file it.
    async fn record(&mut self, input: &mut Input) -> anyhow::Result<()> {
        if self.role()? != Role::Guardian {
            println!("Recording answers is available to the Design System Guardian.");
            return Ok(());
        }

        let mut recorder = Recorder::new();
        recorder.open();
        println!("Press Enter to start recording.");
        if read_line(input).await?.is_none() {
            return Ok(());
        }

        recorder.start()?;
        println!("Recording. Press Enter to stop, Ctrl-C to discard.");
        let enter = async {
            input
                .next_line()
                .await
                .map(drop)
                .context("failed to read from stdin")
        };
        if run_recording(&mut recorder, enter, tokio::signal::ctrl_c()).await?
            == RecordingEnd::Interrupted
        {
            println!("\nRecording discarded.");
            return Ok(());
        }
        recorder.stop()?;

        println!("\nRecorded {}. Type 'send' to answer the asker or 'doc' to add it to documentation.", recorder.elapsed());
        let choice = read_line(input).await?.unwrap_or_default();
        let toast = match choice.trim() {
            "send" => recorder.send()?,
            "doc" => recorder.add_to_documentation()?,
            _ => {
                println!("Recording discarded.");
                return Ok(());
            }
        };
        println!("{toast}");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordingEnd {
    Stopped,
    Interrupted,
}

/// Tick `recorder` once a second until `stop` resolves or `interrupt` fires.
async fn run_recording<S, I>(
    recorder: &mut Recorder,
    stop: S,
    interrupt: I,
) -> anyhow::Result<RecordingEnd>
where
    S: Future<Output = anyhow::Result<()>>,
    I: Future,
{
    tokio::pin!(stop, interrupt);
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                recorder.tick();
                print!("\r● {}", recorder.elapsed());
                let _ = std::io::stdout().flush();
            }
            result = &mut stop => {
                result?;
                return Ok(RecordingEnd::Stopped);
            }
            _ = &mut interrupt => return Ok(RecordingEnd::Interrupted),
        }
    }
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush().context("failed to flush stdout")
}

/// Next stdin line; `None` at end of input or on Ctrl-C.
async fn read_line(input: &mut Input) -> anyhow::Result<Option<String>> {
    tokio::select! {
        line = input.next_line() => line.context("failed to read from stdin"),
        _ = tokio::signal::ctrl_c() => Ok(None),
    }
}

/// Cancel `token` on Ctrl-C until the returned task is aborted.
fn cancel_on_interrupt(token: &CancellationToken) -> tokio::task::JoinHandle<()> {
    let token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            token.cancel();
        }
    })
}
