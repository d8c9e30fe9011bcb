//! Console output formatter for search results and room state

use colored::Colorize;
use dishide_domain::{Business, Pick, RoomId, VotingSession, VotingView};

/// Formats search results and room state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output on or off for the whole process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Numbered search results, listing at most `shown` entries
    ///
    /// With a `session`, results already nominated in it are marked.
    pub fn format_results(
        results: &[Business],
        shown: usize,
        session: Option<&VotingSession>,
    ) -> String {
        if results.is_empty() {
            return format!("{}\n", "No restaurants matched that search.".yellow());
        }

        let mut output = Self::section_header("Search results");
        for (index, business) in results.iter().take(shown).enumerate() {
            let picked = session.is_some_and(|s| s.store().contains_source(&business.id));
            output.push_str(&Self::format_business(index + 1, business, picked));
        }

        let hidden = results.len().saturating_sub(shown);
        if hidden > 0 {
            output.push_str(&format!(
                "\n{}\n",
                format!("{} more (type /more to show them)", hidden).dimmed()
            ));
        }
        output
    }

    fn format_business(position: usize, business: &Business, picked: bool) -> String {
        let mut line = format!("{:>3}. {}", position, business.name.bold());
        if let Some(rating) = business.rating {
            line.push_str(&format!("  {}", format!("{:.1}*", rating).yellow()));
        }
        if let Some(price) = &business.price {
            line.push_str(&format!("  {}", price.green()));
        }
        if !business.categories.is_empty() {
            line.push_str(&format!("  {}", business.category_line().dimmed()));
        }
        if picked {
            line.push_str(&format!("  {}", "(already picked)".magenta()));
        }
        line.push('\n');

        if !business.address.is_empty() {
            line.push_str(&format!("     {}\n", business.address));
        }
        if !business.url.is_empty() {
            line.push_str(&format!("     {}\n", business.url.dimmed().underline()));
        }
        line
    }

    /// Search results as JSON records
    pub fn format_results_json(results: &[Business]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    /// Room picks in display order, with the current winner marked
    pub fn format_picks(room: &RoomId, session: &VotingSession) -> String {
        let mut output = Self::header(&format!("Room {}", room));
        output.push('\n');

        let ordered = session.ordered();
        if ordered.is_empty() {
            output.push_str(&format!(
                "{}\n",
                "No picks yet. Search and /add a contender.".dimmed()
            ));
            return output;
        }

        let winner_id = session.current_winner().map(|p| p.id.clone());
        for (index, pick) in ordered.iter().enumerate() {
            let is_winner = winner_id.as_ref() == Some(&pick.id);
            output.push_str(&Self::format_pick(index + 1, pick, is_winner));
        }

        output.push('\n');
        output.push_str(&Self::format_view(&session.view()));
        output.push('\n');
        output
    }

    fn format_pick(position: usize, pick: &Pick, is_winner: bool) -> String {
        let votes = format!(
            "{} {}",
            pick.votes,
            if pick.votes == 1 { "vote" } else { "votes" }
        );
        let name = if is_winner {
            format!("{} {}", pick.name.green().bold(), "(winner)".green())
        } else {
            pick.name.bold().to_string()
        };

        let mut line = format!("{:>3}. {}  {}\n", position, name, votes.cyan());
        if !pick.note.is_empty() {
            line.push_str(&format!("     {}\n", pick.note.as_str().italic().dimmed()));
        }
        line
    }

    /// One-line description of where the vote stands
    pub fn format_view(view: &VotingView<'_>) -> String {
        match view {
            VotingView::Open => {
                format!("{}", "Voting is open. /lock when everyone is done.".cyan())
            }
            VotingView::LockedNoVotes => {
                format!("{}", "Votes locked, but no votes were cast yet.".yellow())
            }
            VotingView::LockedSingleWinner { winner } => {
                format!("{} takes the crown!", winner.name.green().bold())
            }
            VotingView::LockedTiedUnresolved { leaders } => format!(
                "{} {}. {}",
                "Tie between".yellow(),
                Self::join_names(leaders),
                "/spin to break it.".yellow()
            ),
            VotingView::LockedTiedResolved { leaders, winner } => format!(
                "The wheel picked {} out of {}.",
                winner.name.green().bold(),
                Self::join_names(leaders)
            ),
        }
    }

    /// Winner as shown after the wheel stops, with the nominator's note
    pub fn format_winner_banner(winner: &Pick) -> String {
        let line = "*".repeat(40);
        let mut banner = format!(
            "{}\n{:^40}\n",
            line.magenta(),
            format!("{} wins!", winner.name).bold()
        );
        if !winner.note.is_empty() {
            let note = format!("\"{}\"", winner.note.as_str());
            banner.push_str(&format!("{:^40}\n", note.italic()));
        }
        banner.push_str(&line.magenta().to_string());
        banner
    }

    fn join_names(picks: &[&Pick]) -> String {
        picks
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(40);
        format!("{}\n{:^40}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishide_domain::PickId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn plain() {
        colored::control::set_override(false);
    }

    fn business(id: &str, name: &str) -> Business {
        Business::new(id, name)
    }

    fn session_with(names: &[&str]) -> VotingSession {
        let mut session = VotingSession::new();
        for name in names {
            let id = name.to_lowercase();
            session
                .nominate(PickId::new(id.clone()), business(&id, name), "")
                .unwrap();
        }
        session
    }

    #[test]
    fn test_results_show_first_entries_and_more_hint() {
        plain();
        let results: Vec<Business> = (1..=6)
            .map(|i| business(&format!("b{}", i), &format!("Place {}", i)))
            .collect();

        let output = ConsoleFormatter::format_results(&results, 4, None);
        assert!(output.contains("Place 4"));
        assert!(!output.contains("Place 5"));
        assert!(output.contains("2 more (type /more to show them)"));

        let all = ConsoleFormatter::format_results(&results, results.len(), None);
        assert!(all.contains("Place 6"));
        assert!(!all.contains("/more"));
    }

    #[test]
    fn test_result_line_details() {
        plain();
        let result = business("joe", "Joe's Pizza")
            .with_rating(4.5)
            .with_price("$")
            .with_categories(vec!["Pizza".into(), "Italian".into()])
            .with_address("7 Carmine St, New York");

        let output = ConsoleFormatter::format_results(&[result], 4, None);
        assert!(output.contains("1. Joe's Pizza"));
        assert!(output.contains("4.5*"));
        assert!(output.contains("Pizza, Italian"));
        assert!(output.contains("7 Carmine St, New York"));
    }

    #[test]
    fn test_empty_results() {
        plain();
        let output = ConsoleFormatter::format_results(&[], 4, None);
        assert!(output.contains("No restaurants matched"));
    }

    #[test]
    fn test_format_each_view() {
        plain();
        let mut session = session_with(&["Arepa", "Curry"]);
        assert!(ConsoleFormatter::format_view(&session.view()).contains("Voting is open"));

        session.finalize_voting();
        assert!(
            ConsoleFormatter::format_view(&session.view())
                .contains("no votes were cast yet")
        );

        let mut session = session_with(&["Arepa", "Curry"]);
        session.vote(&PickId::new("curry"));
        session.finalize_voting();
        assert_eq!(
            ConsoleFormatter::format_view(&session.view()),
            "Curry takes the crown!"
        );

        let mut session = session_with(&["Arepa", "Curry"]);
        session.vote(&PickId::new("arepa"));
        session.vote(&PickId::new("curry"));
        session.finalize_voting();
        let tied = ConsoleFormatter::format_view(&session.view());
        assert!(tied.contains("Tie between Arepa, Curry"));

        let mut rng = StdRng::seed_from_u64(7);
        let winner_id = session.spin(&mut rng).unwrap();
        let winner_name = session.store().get(&winner_id).unwrap().name.clone();
        let resolved = ConsoleFormatter::format_view(&session.view());
        assert!(resolved.contains(&format!("The wheel picked {}", winner_name)));
    }

    #[test]
    fn test_format_picks_marks_winner() {
        plain();
        let mut session = session_with(&["Arepa", "Curry"]);
        session.vote(&PickId::new("arepa"));
        session.finalize_voting();

        let output = ConsoleFormatter::format_picks(&RoomId::new("friday"), &session);
        assert!(output.contains("Room friday"));
        assert!(output.contains("1. Arepa (winner)  1 vote"));
        assert!(output.contains("2. Curry  0 votes"));
    }

    #[test]
    fn test_format_picks_empty_room() {
        plain();
        let output = ConsoleFormatter::format_picks(&RoomId::default(), &VotingSession::new());
        assert!(output.contains("No picks yet"));
    }

    #[test]
    fn test_results_link_and_mark_nominated() {
        plain();
        let mut joe = business("joe", "Joe's Pizza");
        joe.url = "https://www.yelp.com/biz/joes-pizza".to_string();
        let results = vec![joe, business("curry", "Curry")];
        let session = session_with(&["Curry"]);

        let output = ConsoleFormatter::format_results(&results, 4, Some(&session));
        assert!(output.contains("https://www.yelp.com/biz/joes-pizza"));
        assert!(output.contains("Curry  (already picked)"));
        assert!(!output.contains("Joe's Pizza  (already picked)"));
    }

    #[test]
    fn test_winner_banner_includes_note() {
        plain();
        let mut session = VotingSession::new();
        session
            .nominate(PickId::new("arepa"), business("arepa", "Arepa"), "cheap and close")
            .unwrap();
        let winner = &session.picks()[0];

        let banner = ConsoleFormatter::format_winner_banner(winner);
        assert!(banner.contains("Arepa wins!"));
        assert!(banner.contains("\"cheap and close\""));
    }
}
