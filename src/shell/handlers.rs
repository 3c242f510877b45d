//! Command handlers. Each is a pure function of the current location and the
//! arguments; side effects are requested through [`Effect`]s on the reply.

use crate::animation::AnimationKind;
use crate::content::{self, Project, CONTACTS, DOCUMENTS, HELP, PROJECTS};

use super::location::Location;
use super::reply::{Effect, Reply, Transition};

const README: &str = "README.md";

/// Static listing for a location.
pub fn listing(at: &Location) -> Vec<String> {
    match at {
        Location::Root => {
            let mut entries = vec!["projects/".to_string(), "contact_me/".to_string()];
            entries.extend(DOCUMENTS.iter().map(|d| d.file.to_string()));
            entries.push("resume".to_string());
            vec![entries.join("  ")]
        }
        Location::Projects => vec![PROJECTS
            .iter()
            .map(|p| format!("{}/", p.name))
            .collect::<Vec<_>>()
            .join("  ")],
        Location::Contact => CONTACTS
            .iter()
            .map(|c| format!("{:<10}{}", c.name, c.url))
            .collect(),
        Location::Project(_) => vec![format!("{README}  ./link")],
    }
}

fn describe(project: &Project) -> Vec<String> {
    let mut lines = vec![
        format!("\x1b[1m{}\x1b[0m", project.title),
        format!("stack: {}", project.stack),
        String::new(),
    ];
    lines.extend(project.description.iter().map(|l| l.to_string()));
    lines.push(String::new());
    lines.push("Type ./link to open the repository.".to_string());
    lines
}

fn no_such_directory(at: &Location, target: &str) -> Transition {
    Transition::stay(at, Reply::failure(format!("cd: {target}: No such directory")))
}

pub fn ls(at: &Location, _args: &[String]) -> Transition {
    Transition::stay(at, Reply::success(listing(at)))
}

pub fn help(at: &Location, _args: &[String]) -> Transition {
    Transition::stay(at, Reply::success(HELP.iter().copied()))
}

pub fn clear(at: &Location, _args: &[String]) -> Transition {
    Transition::stay(
        at,
        Reply::silent()
            .with_effect(Effect::ClearLog)
            .with_effect(Effect::StartAnimation(AnimationKind::Clear)),
    )
}

/// Shared `cd` preamble: operand presence and the absolute targets.
/// Returns the normalised target when a scope-specific rule must decide.
fn cd_target<'a>(at: &Location, args: &'a [String]) -> Result<&'a str, Transition> {
    let Some(raw) = args.first() else {
        return Err(Transition::stay(at, Reply::failure("cd: missing operand")));
    };
    match raw.as_str() {
        "~" | "/" | "~/" => Err(Transition::move_to(Location::Root, Reply::silent())),
        ".." | "../" => Ok(".."),
        other => Ok(other.trim_end_matches('/')),
    }
}

pub fn cd_from_root(at: &Location, args: &[String]) -> Transition {
    let target = match cd_target(at, args) {
        Ok(target) => target,
        Err(done) => return done,
    };

    if target.eq_ignore_ascii_case("projects") {
        return Transition::move_to(Location::Projects, Reply::silent());
    }
    if target.eq_ignore_ascii_case("contact_me") {
        return Transition::move_to(Location::Contact, Reply::silent());
    }
    if target.eq_ignore_ascii_case("resume") || target.eq_ignore_ascii_case("cv") {
        return Transition::stay(
            at,
            Reply::success(["Opening resume..."]).with_effect(Effect::OpenResume),
        );
    }
    if let Some(doc) = content::document_page(target) {
        return Transition::stay(at, Reply::success(doc.body.iter().copied()));
    }
    no_such_directory(at, &args[0])
}

pub fn cd_from_projects(at: &Location, args: &[String]) -> Transition {
    let target = match cd_target(at, args) {
        Ok(target) => target,
        Err(done) => return done,
    };

    if target == ".." {
        return Transition::move_to(Location::Root, Reply::silent());
    }
    match content::project(target) {
        Some(project) => {
            Transition::move_to(Location::Project(project), Reply::success(describe(project)))
        }
        None => no_such_directory(at, &args[0]),
    }
}

pub fn cd_from_contact(at: &Location, args: &[String]) -> Transition {
    let target = match cd_target(at, args) {
        Ok(target) => target,
        Err(done) => return done,
    };

    if target == ".." {
        return Transition::move_to(Location::Root, Reply::silent());
    }
    match content::contact(target) {
        Some(link) => Transition::stay(
            at,
            Reply::success([format!("Opening {}...", link.label)])
                .with_effect(Effect::OpenUrl(link.url.to_string())),
        ),
        None => no_such_directory(at, &args[0]),
    }
}

pub fn cd_from_project(at: &Location, args: &[String]) -> Transition {
    let target = match cd_target(at, args) {
        Ok(target) => target,
        Err(done) => return done,
    };

    match at.parent() {
        Some(parent) if target == ".." => {
            let reply = Reply::success(listing(&parent));
            Transition::move_to(parent, reply)
        }
        _ => no_such_directory(at, &args[0]),
    }
}

pub fn cat(at: &Location, args: &[String]) -> Transition {
    let Some(file) = args.first() else {
        return Transition::stay(at, Reply::failure("cat: missing file operand"));
    };

    let found = match at {
        Location::Root => content::document(file).map(|doc| {
            doc.body.iter().map(|l| l.to_string()).collect::<Vec<_>>()
        }),
        Location::Project(project) if file.eq_ignore_ascii_case(README) => Some(describe(project)),
        _ => None,
    };

    match found {
        Some(lines) => Transition::stay(at, Reply::success(lines)),
        None => Transition::stay(at, Reply::failure(format!("cat: {file}: No such file found"))),
    }
}

pub fn link(at: &Location, args: &[String]) -> Transition {
    match at {
        Location::Project(project) => Transition::stay(
            at,
            Reply::success([format!("Opening {}...", project.url)])
                .with_effect(Effect::OpenUrl(project.url.to_string())),
        ),
        _ => link_unavailable(at, args),
    }
}

pub fn link_unavailable(at: &Location, _args: &[String]) -> Transition {
    Transition::stay(at, Reply::failure("./link: no link available here"))
}
