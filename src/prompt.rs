use std::io::{BufRead, Write};

use secrecy::SecretString;

use crate::error::KeychainError;

pub type Result<T> = std::result::Result<T, KeychainError>;

/// Asks the user for a string and blocks until one is provided.
pub trait Prompter {
    fn ask(&mut self, message: &str) -> Result<String>;
    fn ask_secret(&mut self, message: &str) -> Result<SecretString>;
}

/// Prompts on the controlling terminal. Messages go to stderr so stdout
/// stays reserved for the JSON document.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        let mut stderr = std::io::stderr();
        write!(stderr, "{message}")?;
        stderr.flush()?;

        let mut answer = String::new();
        let read = std::io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            return Err(KeychainError::Prompt("input closed before an answer was given".into()));
        }
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask_secret(&mut self, message: &str) -> Result<SecretString> {
        rpassword::prompt_password(message)
            .map(SecretString::new)
            .map_err(|e| KeychainError::Prompt(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned answers and records every message shown.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        pub answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, message: &str) -> Result<String> {
            self.asked.push(message.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| KeychainError::Prompt("no answer scripted".into()))
        }

        fn ask_secret(&mut self, message: &str) -> Result<SecretString> {
            self.ask(message).map(SecretString::new)
        }
    }
}
