//! Command rule table.
//!
//! Exact keywords, their canned reply pools, and the ordered substring
//! heuristics tried when no keyword matches. Everything here is `static`
//! and shared by every session.

use std::fmt;

use termfolio_core::types::EntryKind;

// =============================================================================
// Command
// =============================================================================

/// Keywords the terminal recognises verbatim (after trim and lowercase).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Whoami,
    Skills,
    Projects,
    Experience,
    Contact,
    Help,
    Clear,
    Theme,
    Joke,
    Quote,
    Time,
    Exit,
}

impl Command {
    /// Every keyword, in help-listing order.
    pub const ALL: [Command; 12] = [
        Command::Whoami,
        Command::Skills,
        Command::Projects,
        Command::Experience,
        Command::Contact,
        Command::Help,
        Command::Clear,
        Command::Theme,
        Command::Joke,
        Command::Quote,
        Command::Time,
        Command::Exit,
    ];

    /// The keyword as typed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Whoami => "whoami",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Experience => "experience",
            Command::Contact => "contact",
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Theme => "theme",
            Command::Joke => "joke",
            Command::Quote => "quote",
            Command::Time => "time",
            Command::Exit => "exit",
        }
    }

    /// Exact, case-insensitive keyword lookup. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Command> {
        let needle = input.trim().to_lowercase();
        Command::ALL.into_iter().find(|c| c.as_str() == needle)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category
// =============================================================================

/// Reply category; becomes the kind of the appended transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Bot,
    System,
    Error,
}

impl From<Category> for EntryKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Bot => EntryKind::Bot,
            Category::System => EntryKind::System,
            Category::Error => EntryKind::Error,
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Where a rule's reply text comes from.
#[derive(Clone, Copy, Debug)]
pub enum Responses {
    /// Fixed pool; one entry is picked uniformly per invocation.
    Variants(&'static [&'static str]),
    /// The wall-clock time at dispatch.
    CurrentTime,
}

/// One exact-keyword rule.
#[derive(Clone, Copy, Debug)]
pub struct CommandRule {
    pub command: Command,
    /// Short label used in suggestions.
    pub description: &'static str,
    pub responses: Responses,
    pub category: Category,
}

/// What a heuristic answers with.
#[derive(Clone, Copy, Debug)]
pub enum HeuristicReply {
    /// The first variant of the given command's pool.
    Class(Command),
    /// A one-off line not reachable by keyword.
    Fixed(&'static str),
}

/// Substring trigger set, tried in table order.
#[derive(Clone, Copy, Debug)]
pub struct Heuristic {
    pub triggers: &'static [&'static str],
    pub reply: HeuristicReply,
}

impl Heuristic {
    /// Whether any trigger occurs in the already-lowercased input.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

/// Buttons offered above the transcript for one-click commands.
#[derive(Clone, Copy, Debug)]
pub struct QuickCommand {
    pub command: Command,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static QUICK_COMMANDS: &[QuickCommand] = &[
    QuickCommand {
        command: Command::Whoami,
        description: "About Abdullah",
        icon: "👨‍💻",
    },
    QuickCommand {
        command: Command::Skills,
        description: "Tech Stack",
        icon: "🛠️",
    },
    QuickCommand {
        command: Command::Projects,
        description: "My Work",
        icon: "🚀",
    },
    QuickCommand {
        command: Command::Experience,
        description: "Work History",
        icon: "💼",
    },
    QuickCommand {
        command: Command::Contact,
        description: "Get in Touch",
        icon: "📧",
    },
    QuickCommand {
        command: Command::Help,
        description: "Available Commands",
        icon: "❓",
    },
];

/// Prefix of the `time` reply.
pub const TIME_PREFIX: &str = "🕒 Current time: ";

pub static COMMAND_RULES: &[CommandRule] = &[
    CommandRule {
        command: Command::Whoami,
        description: "About Abdullah",
        responses: Responses::Variants(WHOAMI),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Skills,
        description: "Tech Stack",
        responses: Responses::Variants(SKILLS),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Projects,
        description: "My Work",
        responses: Responses::Variants(PROJECTS),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Experience,
        description: "Work History",
        responses: Responses::Variants(EXPERIENCE),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Contact,
        description: "Get in Touch",
        responses: Responses::Variants(CONTACT),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Help,
        description: "Available Commands",
        responses: Responses::Variants(HELP),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Clear,
        description: "Clear terminal",
        responses: Responses::Variants(&["🧹 Terminal cleared."]),
        category: Category::System,
    },
    CommandRule {
        command: Command::Theme,
        description: "Toggle dark/light mode",
        responses: Responses::Variants(&["🎨 Theme toggled! Enjoy the new look!"]),
        category: Category::System,
    },
    CommandRule {
        command: Command::Joke,
        description: "Need a laugh?",
        responses: Responses::Variants(JOKES),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Quote,
        description: "Inspirational quotes",
        responses: Responses::Variants(QUOTES),
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Time,
        description: "Current time",
        responses: Responses::CurrentTime,
        category: Category::Bot,
    },
    CommandRule {
        command: Command::Exit,
        description: "Close terminal",
        responses: Responses::Variants(&["👋 Thanks for chatting! See you next time!"]),
        category: Category::System,
    },
];

pub static HEURISTICS: &[Heuristic] = &[
    Heuristic {
        triggers: &["who", "about", "yourself"],
        reply: HeuristicReply::Class(Command::Whoami),
    },
    Heuristic {
        triggers: &["skill", "tech", "technology", "know"],
        reply: HeuristicReply::Class(Command::Skills),
    },
    Heuristic {
        triggers: &["project", "work", "portfolio"],
        reply: HeuristicReply::Class(Command::Projects),
    },
    Heuristic {
        triggers: &["experience", "job", "career"],
        reply: HeuristicReply::Class(Command::Experience),
    },
    Heuristic {
        triggers: &["contact", "email", "reach"],
        reply: HeuristicReply::Class(Command::Contact),
    },
    Heuristic {
        triggers: &["hello", "hi", "hey"],
        reply: HeuristicReply::Fixed(GREETING),
    },
    Heuristic {
        triggers: &["thank", "thanks"],
        reply: HeuristicReply::Fixed(ACKNOWLEDGEMENT),
    },
    Heuristic {
        triggers: &["weather"],
        reply: HeuristicReply::Fixed(WEATHER),
    },
];

/// Look up the rule for a command in a table.
pub fn find_rule(rules: &[CommandRule], command: Command) -> Option<&CommandRule> {
    rules.iter().find(|r| r.command == command)
}

// =============================================================================
// Reply text
// =============================================================================

pub const GREETING: &str = "👋 Hello there! I'm AbduBot, Abdullah's AI assistant. How can I help you today? Try 'help' to see what I can do!";

pub const ACKNOWLEDGEMENT: &str = "😊 You're welcome! Is there anything else you'd like to know about Abdullah's work or skills?";

pub const WEATHER: &str = "☀️ I'm a coding bot, not a weather bot! But I can tell you it's always sunny in the world of programming! ☀️";

static WHOAMI: &[&str] = &[
    "🤖 Hi there! I'm AbduBot, Abdullah's AI assistant. Abdullah is a passionate Software Engineering student at UCP with a solid 3.6 CGPA. He's the kind of developer who sees bugs as puzzles to solve! ☕",
    "👨‍💻 Meet Muhammad Abdullah Uzair - a full-stack developer who believes every line of code tells a story. Currently mastering Software Engineering at University of Central Punjab while building amazing digital experiences!",
    "🚀 Abdullah Uzair here (well, his digital twin)! I'm a Software Engineering student who loves turning coffee into code. My mission? Creating digital solutions that make people's lives easier, one pixel at a time!",
];

static SKILLS: &[&str] = &[
    "💻 Abdullah's Tech Arsenal:\n\n🎨 Frontend Magic:\n• HTML5, CSS3, JavaScript (Expert)\n• Bootstrap, Tailwind CSS (Advanced)\n• Responsive Design (Master)\n\n⚙️ Backend Power:\n• PHP, Node.js, Express.js\n• RESTful APIs\n\n🗄️ Database Mastery:\n• MySQL, MongoDB\n\n🔧 Tools & More:\n• Git & GitHub, VS Code, Postman\n• C, C++, Python\n• Machine Learning, SEO\n• Agile Methodology\n\nAlways learning, always growing! 📈",
    "🛠️ Technical Expertise Breakdown:\n\n📊 Proficiency Levels:\n• Web Development: 95% ⭐⭐⭐⭐⭐\n• JavaScript: 90% ⭐⭐⭐⭐⭐\n• PHP/Backend: 88% ⭐⭐⭐⭐\n• Database Design: 85% ⭐⭐⭐⭐\n• Python/ML: 80% ⭐⭐⭐⭐\n• SEO & Optimization: 88% ⭐⭐⭐⭐\n\n🎯 Currently exploring: AI/ML integration in web apps!",
];

static PROJECTS: &[&str] = &[
    "🚀 Abdullah's Project Showcase:\n\n⭐ Featured Projects:\n• MacroMate - AI-powered health & fitness tracker (Final Year Project)\n• XRevStudio.com - Creative agency portfolio with stunning animations\n• ObecheInterior.com - Elegant interior design showcase\n• LevelUpSol.com.pk - Professional corporate website\n• CricketX.net - Enhanced sports platform\n\n💡 Each project represents a unique challenge solved with creativity and cutting-edge tech!",
    "📂 Project Portfolio Deep Dive:\n\n🏆 MacroMate (2024) - The Crown Jewel\n   Tech: AI/ML + React + Node.js + MongoDB\n   Features: Personalized meal planning, workout tracking\n\n🎨 XRevStudio - Creative Excellence\n   Tech: React + Tailwind + Framer Motion\n   Features: Interactive galleries, SEO optimized\n\n🏠 ObecheInterior - Design Elegance\n   Tech: HTML5 + CSS3 + JavaScript\n   Features: Responsive, gallery showcase\n\nWant to explore any project in detail? Just ask!",
];

static EXPERIENCE: &[&str] = &[
    "💼 Professional Journey:\n\n🔍 SEO Specialist at Web20Ranker (Jul 2024 - Apr 2025)\n• Improved team efficiency by 40% through custom workflows\n• Built advanced ranking signal systems\n• Enhanced Web 2.0 backlink strategies\n\n🎨 Web Designer Intern at LevelUp Solutions (Apr 2024 - Jul 2024)\n• Developed responsive landing pages\n• Increased user engagement by 25%\n• Ensured cross-browser compatibility\n\n📈 1+ years of hands-on experience, 5+ successful projects!",
    "🚀 Career Highlights:\n\n📊 Current Role - SEO Specialist:\n• Leading workflow optimization initiatives\n• Developing custom SEO tools and systems\n• Collaborating with cross-functional teams\n\n🌟 Previous Experience:\n• Front-end development internship\n• UI/UX design implementations\n• Client project management\n\n🎯 Always seeking new challenges and growth opportunities!",
];

static CONTACT: &[&str] = &[
    "📧 Let's Connect!\n\n📱 Reach out to Abdullah:\n• Email: abdullahuzair860@gmail.com\n• LinkedIn: linkedin.com/in/abdullah-uzair-2a18b9278/\n• GitHub: github.com/mabdullahuzair\n\n💬 Whether it's a project collaboration, job opportunity, or just a tech chat - Abdullah loves connecting with fellow developers and innovative minds!\n\n🚀 Ready to build something amazing together?",
    "🤝 Get In Touch:\n\n📧 Professional Email: abdullahuzair860@gmail.com\n🔗 LinkedIn: Connect for professional networking\n💻 GitHub: Check out the code repositories\n\n💡 Open to:\n• Freelance projects\n• Full-time opportunities\n• Tech collaborations\n• Mentorship discussions\n\nDrop a message anytime! 😊",
];

static HELP: &[&str] = &[
    "🤖 AbduBot Command Center:\n\n🔧 Available Commands:\n• whoami - Learn about Abdullah\n• skills - Technical expertise\n• projects - Portfolio showcase\n• experience - Professional journey\n• contact - Get in touch\n• clear - Clear terminal\n• theme - Toggle dark/light mode\n• joke - Need a laugh?\n• quote - Inspirational quotes\n• time - Current time\n• weather - Ask about weather\n• exit - Close terminal\n\n💡 Pro tip: I understand natural language too! Try asking questions like 'What technologies do you know?' or 'Tell me about your projects'",
];

static JOKES: &[&str] = &[
    "😄 Why do programmers prefer dark mode?\nBecause light attracts bugs! 🐛",
    "🤓 Why do Java developers wear glasses?\nBecause they can't C#! 👓",
    "😅 How many programmers does it take to change a light bulb?\nNone. That's a hardware problem! 💡",
    "🤣 Why did the programmer quit his job?\nHe didn't get arrays! 📊",
];

static QUOTES: &[&str] = &[
    "💭 'Code is like humor. When you have to explain it, it's bad.' - Cory House",
    "🚀 'The best way to predict the future is to implement it.' - David Heinemeier Hansson",
    "💡 'First, solve the problem. Then, write the code.' - John Johnson",
    "⚡ 'Experience is the name everyone gives to their mistakes.' - Oscar Wilde",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_has_exactly_one_rule() {
        for command in Command::ALL {
            let count = COMMAND_RULES.iter().filter(|r| r.command == command).count();
            assert_eq!(count, 1, "rule count for {}", command);
        }
    }

    #[test]
    fn test_variant_pools_are_non_empty() {
        for rule in COMMAND_RULES {
            if let Responses::Variants(pool) = rule.responses {
                assert!(!pool.is_empty(), "{} has no variants", rule.command);
                assert!(pool.iter().all(|v| !v.trim().is_empty()));
            }
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Command::parse("whoami"), Some(Command::Whoami));
        assert_eq!(Command::parse("  WhoAmI \t"), Some(Command::Whoami));
        assert_eq!(Command::parse("EXIT"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_rejects_partial_keywords() {
        assert_eq!(Command::parse("who"), None);
        assert_eq!(Command::parse("skills please"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_command_display_round_trips_through_parse() {
        for command in Command::ALL {
            assert_eq!(Command::parse(&command.to_string()), Some(command));
        }
    }

    #[test]
    fn test_category_to_entry_kind() {
        assert_eq!(EntryKind::from(Category::Bot), EntryKind::Bot);
        assert_eq!(EntryKind::from(Category::System), EntryKind::System);
        assert_eq!(EntryKind::from(Category::Error), EntryKind::Error);
    }

    #[test]
    fn test_heuristic_matches_lowercased_substrings() {
        let weather = HEURISTICS.last().unwrap();
        assert!(weather.matches("how's the weather today?"));
        assert!(!weather.matches("sunny"));
    }

    #[test]
    fn test_quick_commands_have_rules() {
        for quick in QUICK_COMMANDS {
            let rule = find_rule(COMMAND_RULES, quick.command).unwrap();
            assert_eq!(rule.description, quick.description);
        }
    }

    #[test]
    fn test_heuristic_classes_point_at_variant_rules() {
        for heuristic in HEURISTICS {
            if let HeuristicReply::Class(command) = heuristic.reply {
                let rule = find_rule(COMMAND_RULES, command).unwrap();
                assert!(matches!(rule.responses, Responses::Variants(_)));
            }
        }
    }
}
