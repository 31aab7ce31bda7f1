//! Command interpreter.
//!
//! Resolves raw input to a reply in three tiers: exact keyword, substring
//! heuristic, then an error-category fallback that echoes the input and
//! suggests one random command. Never fails for any input.

use chrono::{DateTime, Local};
use rand::Rng;

use crate::rules::{
    find_rule, Category, Command, CommandRule, Heuristic, HeuristicReply, Responses,
    COMMAND_RULES, HEURISTICS, TIME_PREFIX,
};

/// Result of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Set only for exact keyword matches; drives clear/theme/exit handling.
    pub command: Option<Command>,
    pub text: String,
    pub category: Category,
}

/// Rule-based dispatcher over a static rule table.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    rules: &'static [CommandRule],
    heuristics: &'static [Heuristic],
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Dispatcher over the built-in portfolio tables.
    pub fn new() -> Self {
        Self::with_tables(COMMAND_RULES, HEURISTICS)
    }

    /// Dispatcher over caller-supplied tables.
    pub fn with_tables(rules: &'static [CommandRule], heuristics: &'static [Heuristic]) -> Self {
        Self { rules, heuristics }
    }

    /// Classify `raw` input.
    ///
    /// `now` feeds time-valued replies and `rng` picks among reply variants
    /// and fallback suggestions.
    pub fn classify<R: Rng>(
        &self,
        raw: &str,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> Classification {
        let input = raw.trim();
        let lowered = input.to_lowercase();

        // Exact keyword
        if let Some(rule) = Command::parse(&lowered).and_then(|c| find_rule(self.rules, c)) {
            tracing::debug!(command = %rule.command, "Exact command match");
            return Classification {
                command: Some(rule.command),
                text: render(rule, now, rng),
                category: rule.category,
            };
        }

        // Heuristics, first match wins
        for heuristic in self.heuristics {
            if !heuristic.matches(&lowered) {
                continue;
            }
            let text = match heuristic.reply {
                HeuristicReply::Fixed(line) => Some(line.to_string()),
                HeuristicReply::Class(command) => {
                    find_rule(self.rules, command).map(|rule| render_first(rule, now))
                }
            };
            if let Some(text) = text {
                tracing::debug!(triggers = ?heuristic.triggers, "Heuristic match");
                return Classification {
                    command: None,
                    text,
                    category: Category::Bot,
                };
            }
        }

        tracing::debug!(input_len = input.len(), "No rule matched, using fallback");
        Classification {
            command: None,
            text: self.fallback(input, rng),
            category: Category::Error,
        }
    }

    fn fallback<R: Rng>(&self, input: &str, rng: &mut R) -> String {
        let candidates: Vec<&CommandRule> = self
            .rules
            .iter()
            .filter(|r| r.command != Command::Help)
            .collect();

        let suggestion = if candidates.is_empty() {
            String::new()
        } else {
            let pick = candidates[rng.random_range(0..candidates.len())];
            format!("\n• {} - {}", pick.command, pick.description)
        };

        format!(
            "❌ Command '{}' not recognized.\n\n💡 Try these popular commands:\n• help - See all available commands{}\n\n🤖 I also understand natural language! Try asking: \"What are your skills?\" or \"Tell me about your projects\"",
            input, suggestion
        )
    }
}

fn render<R: Rng>(rule: &CommandRule, now: DateTime<Local>, rng: &mut R) -> String {
    match rule.responses {
        Responses::Variants(pool) if !pool.is_empty() => {
            pool[rng.random_range(0..pool.len())].to_string()
        }
        Responses::Variants(_) => rule.description.to_string(),
        Responses::CurrentTime => format_time(now),
    }
}

fn render_first(rule: &CommandRule, now: DateTime<Local>) -> String {
    match rule.responses {
        Responses::Variants(pool) => pool
            .first()
            .map(|v| v.to_string())
            .unwrap_or_else(|| rule.description.to_string()),
        Responses::CurrentTime => format_time(now),
    }
}

fn format_time(now: DateTime<Local>) -> String {
    format!("{}{}", TIME_PREFIX, now.format("%-I:%M:%S %p"))
}

// =============================================================================
// Tests
// =============================================================================
