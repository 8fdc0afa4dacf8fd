use crate::chat::build_chat_request;
use crate::client::OpenAiClient;
use crate::config::Settings;
use crate::constants::EXIT_COMMAND;
use crate::errors::CliError;
use crate::utils::create_spinner;
use colored::Colorize;
use log::{debug, error};
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum PromptInput<'a> {
    Exit,
    Empty,
    Prompt(&'a str),
}

pub fn classify_input(line: &str) -> PromptInput<'_> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case(EXIT_COMMAND) {
        PromptInput::Exit
    } else if trimmed.is_empty() {
        PromptInput::Empty
    } else {
        PromptInput::Prompt(trimmed)
    }
}

/// Prompt loop: read a line, send it, print the first choice, repeat.
///
/// Request failures are logged, echoed to `output`, and the loop moves on to the next prompt. Console
/// failures and unencodable requests end it with an error.
pub async fn run<R, W>(
    client: &OpenAiClient,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        write!(output, "\nEnter your prompt (or 'exit' to quit): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("end of input");
            writeln!(output, "\n{}", "Goodbye!".yellow())?;
            return Ok(());
        }

        let prompt = match classify_input(&line) {
            PromptInput::Exit => {
                writeln!(output, "\n{}", "Goodbye!".yellow())?;
                return Ok(());
            }
            PromptInput::Empty => {
                writeln!(output, "Please enter a prompt.")?;
                continue;
            }
            PromptInput::Prompt(prompt) => prompt,
        };

        let request = build_chat_request(prompt, &settings.model)
            .with_response_format(settings.response_format);

        let spinner = create_spinner("Waiting for a reply...");
        let result = client.send(&request).await;
        spinner.finish_and_clear();

        match result {
            Ok(response) => match response.first_message() {
                Some(message) => writeln!(
                    output,
                    "\n{} {}",
                    "ChatGPT:".bold().green(),
                    message.content
                )?,
                None => writeln!(output, "\nNo response choice received.")?,
            },
            Err(err) if err.is_recoverable() => {
                error!("Error from OpenAI request: {}", err);
                writeln!(output, "\n{} {}", "Request failed:".bold().red(), err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }
}
