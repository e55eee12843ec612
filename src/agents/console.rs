//! Line-based console prompts and the human agent built on them.
//!
//! All human seats share one `Console`, so a single input stream feeds the
//! whole table in order. Malformed answers are re-prompted; only a closed
//! input stream or an I/O failure is an error.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use super::{DecisionAgent, RollPurpose};
use crate::core::{Direction, PlayerId, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::AgentError;

/// Console shared by every human seat.
pub type SharedConsole = Rc<RefCell<Console>>;

/// Prompt/answer channel over any line-based reader and writer.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    #[must_use]
    pub fn shared(self) -> SharedConsole {
        Rc::new(RefCell::new(self))
    }

    /// Print `prompt` and read one line, without its line ending.
    ///
    /// `waiting_for` names the expected answer in the error raised when the
    /// input is closed.
    pub fn ask(&mut self, prompt: &str, waiting_for: &str) -> Result<String, AgentError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AgentError::InputClosed(waiting_for.to_string()));
        }
        let answer = line.trim_end_matches(&['\n', '\r'][..]);
        Ok(answer.to_string())
    }

    /// Wait for any line. A closed input ends the wait instead of failing.
    pub fn pause(&mut self, prompt: &str) -> Result<(), AgentError> {
        match self.ask(prompt, "a key press") {
            Ok(_) | Err(AgentError::InputClosed(_)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Ask until `parse` accepts the answer, using `retry` after the first refusal.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        waiting_for: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, AgentError> {
        let mut answer = self.ask(prompt, waiting_for)?;
        loop {
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            answer = self.ask(retry, waiting_for)?;
        }
    }

    /// Ask how many players will play, 2 to 8.
    pub fn ask_player_count(&mut self) -> Result<usize, AgentError> {
        self.ask_until(
            &format!("How many players will play? (between {MIN_PLAYERS} and {MAX_PLAYERS}) "),
            &format!("Error! Please enter a number of players between {MIN_PLAYERS} and {MAX_PLAYERS} only: "),
            "the number of players",
            |answer| parse_count(answer, MIN_PLAYERS, MAX_PLAYERS),
        )
    }

    /// Ask how many of `player_count` players are human, 1 to `player_count`.
    pub fn ask_human_count(&mut self, player_count: usize) -> Result<usize, AgentError> {
        self.ask_until(
            &format!("Of these {player_count} players, how many are human? "),
            &format!("Error! Please enter a number of players between 1 and {player_count} only: "),
            "the number of human players",
            |answer| parse_count(answer, 1, player_count),
        )
    }
}

/// Decimal digits only, within `min..=max`.
fn parse_count(answer: &str, min: usize, max: usize) -> Option<usize> {
    let answer = answer.trim();
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    answer.parse().ok().filter(|n| (min..=max).contains(n))
}

/// Human-controlled seat answering through the shared console.
pub struct HumanAgent {
    console: SharedConsole,
}

impl HumanAgent {
    #[must_use]
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

impl DecisionAgent for HumanAgent {
    fn choose_direction(&mut self, player: PlayerId) -> Result<Direction, AgentError> {
        self.console.borrow_mut().ask_until(
            &format!(
                "Player {}: which way should play go? (1 for increasing seat numbers, -1 for decreasing)\n",
                player.0
            ),
            "Error, please enter 1 (increasing) or -1 (decreasing) only.\n",
            "a direction",
            Direction::parse,
        )
    }

    fn ready_to_roll(&mut self, player: PlayerId, purpose: RollPurpose) -> Result<(), AgentError> {
        let prompt = match purpose {
            RollPurpose::Opening { .. } => format!("Player {}: press Enter to roll the dice", player.0),
            RollPurpose::Turn => format!("Your turn, player {}. Press Enter to roll the dice", player.0),
        };
        self.console.borrow_mut().ask(&prompt, "a roll")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Writer whose contents stay readable after the console takes it.
    #[derive(Clone, Default)]
    struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn console(input: &str) -> (Console, Capture) {
        let capture = Capture::default();
        (Console::new(Cursor::new(input.to_string()), capture.clone()), capture)
    }

    #[test]
    fn test_player_count_reprompts_until_valid() {
        let (mut c, out) = console("abc\n9\n1\n\n-3\n4\n");
        assert_eq!(c.ask_player_count().unwrap(), 4);
        assert_eq!(out.text().matches("Error!").count(), 5);
    }

    #[test]
    fn test_human_count_bounded_by_players() {
        let (mut c, _) = console("0\n4\n3\n");
        assert_eq!(c.ask_human_count(3).unwrap(), 3);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let (mut c, _) = console("12\n");
        let err = c.ask_player_count().unwrap_err();
        assert!(matches!(err, AgentError::InputClosed(ref what) if what == "the number of players"));
    }

    #[test]
    fn test_pause_tolerates_closed_input() {
        let (mut c, out) = console("\n");
        assert!(c.pause("Press ENTER to quit").is_ok());
        assert!(c.pause("Press ENTER to quit").is_ok());
        assert_eq!(out.text().matches("Press ENTER").count(), 2);
    }

    #[test]
    fn test_pause_reports_io_failure() {
        struct Broken;

        impl io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "unplugged"))
            }
        }

        let mut c = Console::new(io::BufReader::new(Broken), io::sink());
        assert!(matches!(c.pause(""), Err(AgentError::Io(_))));
    }

    #[test]
    fn test_direction_accepts_only_literals() {
        let (c, out) = console("right\n+1\n 1\n-1\n");
        let mut agent = HumanAgent::new(c.shared());

        assert_eq!(agent.choose_direction(PlayerId::new(2)).unwrap(), Direction::Backward);
        assert_eq!(out.text().matches("Error, please enter").count(), 3);
        assert!(out.text().starts_with("Player 2:"));
    }

    #[test]
    fn test_direction_handles_crlf() {
        let (c, _) = console("1\r\n");
        let mut agent = HumanAgent::new(c.shared());
        assert_eq!(agent.choose_direction(PlayerId::new(1)).unwrap(), Direction::Forward);
    }

    #[test]
    fn test_roll_gate_accepts_any_line() {
        let (c, out) = console("whatever\n\n");
        let mut agent = HumanAgent::new(c.shared());

        agent.ready_to_roll(PlayerId::new(3), RollPurpose::Turn).unwrap();
        agent
            .ready_to_roll(PlayerId::new(3), RollPurpose::Opening { attempt: 0 })
            .unwrap();
        assert!(agent.ready_to_roll(PlayerId::new(3), RollPurpose::Turn).is_err());
        assert!(out.text().contains("Your turn, player 3"));
    }

    #[test]
    fn test_agents_share_one_input_stream() {
        let shared = console("1\n\n").0.shared();
        let mut first = HumanAgent::new(shared.clone());
        let mut second = HumanAgent::new(shared);

        assert_eq!(first.choose_direction(PlayerId::new(1)).unwrap(), Direction::Forward);
        assert!(second.ready_to_roll(PlayerId::new(2), RollPurpose::Turn).is_ok());
        assert!(first.ready_to_roll(PlayerId::new(1), RollPurpose::Turn).is_err());
    }
}
