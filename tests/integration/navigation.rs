//! Navigation integration tests.
//!
//! These tests walk the directory state machine through `Session::submit`
//! and check the outcome text a visitor would see.

use folio::content::{CONTACTS, PROJECTS};
use folio::shell::{dispatch, Effect, Location, Outcome, Verb};
use folio::Session;

fn output(session: &mut Session, line: &str) -> Vec<String> {
    match session.submit(line).expect("non-blank line").outcome {
        Outcome::Success(lines) => lines,
        Outcome::Failure(msg) => vec![msg],
    }
}

/// Given a fresh session
/// When the visitor browses into a project and back out
/// Then every step lands where the prompt says
#[test]
fn test_project_walkthrough() {
    let mut session = Session::new();

    session.submit("cd projects");
    assert_eq!(session.location(), Location::Projects);

    let listing = output(&mut session, "ls").join("\n");
    for project in PROJECTS.iter() {
        assert!(listing.contains(project.name), "{} missing", project.name);
    }

    let description = output(&mut session, "cd feel_cv");
    assert!(description[0].contains("feel_cv"));
    assert_eq!(session.prompt("guest", "folio"), "guest@folio:~/projects/feel_cv$");

    let reply = session.submit("./link").unwrap();
    assert_eq!(
        reply.effects,
        vec![Effect::OpenUrl(PROJECTS[0].url.to_string())]
    );

    let back = output(&mut session, "cd ..").join("\n");
    assert_eq!(session.location(), Location::Projects);
    for project in PROJECTS.iter() {
        assert!(back.contains(project.name), "{} missing after cd ..", project.name);
    }
    session.submit("cd ..");
    assert_eq!(session.location(), Location::Root);
}

#[test]
fn test_cat_unknown_file_keeps_location() {
    let mut session = Session::new();
    assert_eq!(
        output(&mut session, "cat resume.txt"),
        ["cat: resume.txt: No such file found"]
    );
    assert_eq!(session.location(), Location::Root);
}

#[test]
fn test_cd_dotdot_at_root() {
    let mut session = Session::new();
    assert_eq!(output(&mut session, "cd .."), ["cd: ..: No such directory"]);
    assert_eq!(session.location(), Location::Root);
}

#[test]
fn test_contact_links_open_without_moving() {
    let mut session = Session::new();
    session.submit("cd contact_me");
    for link in CONTACTS.iter() {
        let reply = session.submit(&format!("cd {}", link.name.to_uppercase())).unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.effects, vec![Effect::OpenUrl(link.url.to_string())]);
        assert_eq!(session.location(), Location::Contact);
    }
}

#[test]
fn test_contact_and_projects_are_siblings() {
    let mut session = Session::new();
    session.submit("cd contact_me");
    assert_eq!(output(&mut session, "cd projects"), ["cd: projects: No such directory"]);
    session.submit("cd ~");
    session.submit("cd projects");
    assert_eq!(session.location(), Location::Projects);
}

#[test]
fn test_every_verb_from_every_location_has_one_outcome() {
    for at in Location::all() {
        for verb in Verb::ALL {
            let line = format!("{verb} x");
            let transition = dispatch(&at, &line).expect("dispatches");
            match transition.reply.outcome {
                Outcome::Success(_) => {}
                Outcome::Failure(msg) => assert!(!msg.is_empty()),
            }
        }
    }
}

#[test]
fn test_unknown_command_everywhere() {
    for at in Location::all() {
        let transition = dispatch(&at, "rm -rf /").unwrap();
        assert_eq!(transition.location, at);
        assert_eq!(
            transition.reply.outcome,
            Outcome::Failure("Command not found: rm".to_string())
        );
    }
}
