//! Canned portfolio content: listings, documents, projects, links and
//! the ASCII art used by the animations.
//!
//! Output strings may carry ANSI colour escapes; the UI converts them with
//! `ansi-to-tui` and headless mode strips them.

/// A project directory under `~/projects`.
#[derive(Debug, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub title: &'static str,
    pub stack: &'static str,
    pub description: &'static [&'static str],
    pub url: &'static str,
}

/// A `cat`-able profile document at `~`.
#[derive(Debug, PartialEq, Eq)]
pub struct Document {
    pub file: &'static str,
    /// Name accepted by `cd` at the root (rendered, not entered).
    pub page: &'static str,
    pub body: &'static [&'static str],
}

/// An entry inside `~/contact_me`.
#[derive(Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub name: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

/// An expandable block in the tabbed view's Work section.
#[derive(Debug, PartialEq, Eq)]
pub struct ResumeBlock {
    pub role: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub details: &'static [&'static str],
}

pub static PROJECTS: [Project; 4] = [
    Project {
        name: "feel_cv",
        title: "feel_cv - real-time facial emotion recognition",
        stack: "Python, OpenCV, PyTorch",
        description: &[
            "Classifies seven facial expressions from a webcam stream at 30 fps.",
            "A small CNN trained on FER-2013 with face alignment done in OpenCV.",
        ],
        url: "https://github.com/folio-dev/feel_cv",
    },
    Project {
        name: "pathfinder",
        title: "pathfinder - grid search visualiser",
        stack: "TypeScript, Canvas",
        description: &[
            "Animates BFS, Dijkstra and A* over a drawable maze.",
            "Walls, weights and start/end nodes are placed with the mouse.",
        ],
        url: "https://github.com/folio-dev/pathfinder",
    },
    Project {
        name: "chess_engine",
        title: "chess_engine - bitboard chess engine",
        stack: "C++",
        description: &[
            "Alpha-beta search with move ordering and a transposition table.",
            "Speaks UCI, so it plugs into any standard chess GUI.",
        ],
        url: "https://github.com/folio-dev/chess_engine",
    },
    Project {
        name: "weather_bot",
        title: "weather_bot - forecast chat bot",
        stack: "Node.js, Discord API",
        description: &[
            "Answers forecast questions in Discord channels.",
            "Caches upstream responses per city for ten minutes.",
        ],
        url: "https://github.com/folio-dev/weather_bot",
    },
];

pub static DOCUMENTS: [Document; 3] = [
    Document {
        file: "about.txt",
        page: "about",
        body: &[
            "\x1b[1mAbout me\x1b[0m",
            "",
            "Software engineer who enjoys computer vision, tooling and",
            "anything that turns a messy problem into a tidy interface.",
            "Currently building developer tools; previously robotics.",
        ],
    },
    Document {
        file: "skills.txt",
        page: "skills",
        body: &[
            "\x1b[1mSkills\x1b[0m",
            "",
            "languages   Python, TypeScript, C++, Rust",
            "ml          PyTorch, OpenCV, scikit-learn",
            "web         React, Node.js, PostgreSQL",
            "tools       Git, Docker, Linux, CI pipelines",
        ],
    },
    Document {
        file: "work.txt",
        page: "work",
        body: &[
            "\x1b[1mWork\x1b[0m",
            "",
            "2023-now    Software Engineer, Tooling Co.",
            "2021-2023   Computer Vision Intern, Robotics Lab",
            "2019-2021   Teaching Assistant, Data Structures",
        ],
    },
];

pub static CONTACTS: [ContactLink; 3] = [
    ContactLink {
        name: "github",
        label: "GitHub",
        url: "https://github.com/folio-dev",
    },
    ContactLink {
        name: "linkedin",
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/folio-dev",
    },
    ContactLink {
        name: "email",
        label: "Email",
        url: "mailto:hello@folio.dev",
    },
];

pub static RESUME_BLOCKS: [ResumeBlock; 3] = [
    ResumeBlock {
        role: "Software Engineer",
        org: "Tooling Co.",
        period: "2023 - now",
        details: &[
            "Own the internal build cache service.",
            "Cut median CI time from 14 to 6 minutes.",
        ],
    },
    ResumeBlock {
        role: "Computer Vision Intern",
        org: "Robotics Lab",
        period: "2021 - 2023",
        details: &[
            "Trained grasp-point detectors for a pick-and-place arm.",
            "Wrote the dataset labelling tool the lab still uses.",
        ],
    },
    ResumeBlock {
        role: "Teaching Assistant",
        org: "Data Structures course",
        period: "2019 - 2021",
        details: &["Ran weekly labs for 60 students.", "Wrote the autograder."],
    },
];

pub const HELP: &[&str] = &[
    "Available commands:",
    "  ls             list the current directory",
    "  cd <dir>       change directory (cd .. to go back, cd resume for my CV)",
    "  cat <file>     print a file",
    "  clear, cls     clear the screen",
    "  ./link         open the current project's repository",
    "  help           show this list",
];

/// Lines revealed one per tick during the boot sequence.
pub const BOOT_LINES: &[&str] = &[
    "[ ok ] mounting /home/guest",
    "[ ok ] loading profile",
    "[ ok ] indexing projects",
    "[ ok ] starting shell",
];

/// Shown once when the boot sequence finishes (or is skipped).
pub const BANNER: &[&str] = &[
    "\x1b[32m  __       _ _       \x1b[0m",
    "\x1b[32m / _| ___ | (_) ___  \x1b[0m",
    "\x1b[32m| |_ / _ \\| | |/ _ \\ \x1b[0m",
    "\x1b[32m|  _| (_) | | | (_) |\x1b[0m",
    "\x1b[32m|_|  \\___/|_|_|\\___/ \x1b[0m",
    "",
    "Welcome! Type 'help' to see what you can do.",
];

/// The four frames looped after `clear`.
pub const CLEAR_FRAMES: [&[&str]; 4] = [
    &["   .   ", "  (o)  ", "   '   "],
    &["   o   ", "  (.)  ", "   '   "],
    &["   '   ", "  (.)  ", "   o   "],
    &["   .   ", "  (')  ", "   o   "],
];

pub fn project(name: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

pub fn document(file: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.file.eq_ignore_ascii_case(file))
}

pub fn document_page(page: &str) -> Option<&'static Document> {
    DOCUMENTS.iter().find(|d| d.page.eq_ignore_ascii_case(page))
}

pub fn contact(name: &str) -> Option<&'static ContactLink> {
    CONTACTS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Remove ANSI CSI sequences (`ESC [ ... final`) for plain-text output.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
