//! Slash command parsing for the room REPL

/// Which pick a `/vote` refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteTarget {
    /// 1-based position in the current pick list
    Position(usize),
    /// Pick id as stored
    Id(String),
}

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/search <term> [@ <place>]`; plain text is a search too
    Search { term: String, place: Option<String> },
    /// `/near <lat> <lon> <term>`
    Near {
        latitude: String,
        longitude: String,
        term: String,
    },
    More,
    Add { position: usize, note: String },
    Vote(VoteTarget),
    Picks,
    Lock,
    Spin,
    Winner,
    Reset,
    Room,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; `Err` carries a usage hint
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if !line.starts_with('/') {
            return Ok(Self::search(line));
        }

        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/search" | "/s" => Ok(Self::search(rest)),
            "/near" => Self::near(rest),
            "/more" | "/m" => Ok(Command::More),
            "/add" | "/a" => Self::add(rest),
            "/vote" | "/v" => Self::vote(rest),
            "/picks" | "/p" | "/list" => Ok(Command::Picks),
            "/lock" => Ok(Command::Lock),
            "/spin" => Ok(Command::Spin),
            "/winner" | "/w" => Ok(Command::Winner),
            "/reset" => Ok(Command::Reset),
            "/room" => Ok(Command::Room),
            "/help" | "/h" | "/?" => Ok(Command::Help),
            "/quit" | "/exit" | "/q" => Ok(Command::Quit),
            other => Err(format!(
                "Unknown command: {}\nType /help for available commands",
                other
            )),
        }
    }

    fn search(rest: &str) -> Self {
        match rest.split_once('@') {
            Some((term, place)) => Command::Search {
                term: term.trim().to_string(),
                place: Some(place.trim().to_string()).filter(|p| !p.is_empty()),
            },
            None => Command::Search {
                term: rest.trim().to_string(),
                place: None,
            },
        }
    }

    fn near(rest: &str) -> Result<Self, String> {
        let mut parts = rest.splitn(3, char::is_whitespace);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), term) if !lat.is_empty() => Ok(Command::Near {
                latitude: lat.to_string(),
                longitude: lon.to_string(),
                term: term.unwrap_or("").trim().to_string(),
            }),
            _ => Err("Usage: /near <lat> <lon> <term>".to_string()),
        }
    }

    fn add(rest: &str) -> Result<Self, String> {
        let (position, note) = match rest.split_once(char::is_whitespace) {
            Some((position, note)) => (position, note.trim()),
            None => (rest, ""),
        };
        match position.parse::<usize>() {
            Ok(position) if position > 0 => Ok(Command::Add {
                position,
                note: note.to_string(),
            }),
            _ => Err("Usage: /add <result number> [note]".to_string()),
        }
    }

    fn vote(rest: &str) -> Result<Self, String> {
        if rest.is_empty() {
            return Err("Usage: /vote <pick number | pick id>".to_string());
        }
        match rest.parse::<usize>() {
            Ok(0) => Err("Pick numbers start at 1".to_string()),
            Ok(position) => Ok(Command::Vote(VoteTarget::Position(position))),
            Err(_) => Ok(Command::Vote(VoteTarget::Id(rest.to_string()))),
        }
    }
}
