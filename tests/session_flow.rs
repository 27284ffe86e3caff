//! End-to-end flows driven purely through key events.

use arm23_term::core::{Effect, LoadingTick, Mode, TerminalSession, VirtualFs};
use arm23_term::models::{Key, VirtualPath};

fn session() -> TerminalSession {
    TerminalSession::with_seed(2024)
        .with_fs(VirtualFs::default_tree())
        .with_clock(|| "Mon Jan 01 2024".to_string())
}

fn enter(s: &mut TerminalSession, line: &str) -> Option<Effect> {
    for c in line.chars() {
        s.handle_key(Key::Char(c));
    }
    s.handle_key(Key::Enter)
}

/// Output rows added by running `line`.
fn run(s: &mut TerminalSession, line: &str) -> Vec<String> {
    let before = s.output().len();
    enter(s, line);
    s.output().texts().split_off(before)
}

#[test]
fn test_folder_walkthrough() {
    let mut s = session();
    assert_eq!(run(&mut s, "mkdir docs2"), vec!["Folder \"docs2\" created"]);
    assert!(run(&mut s, "cd docs2").is_empty());
    assert_eq!(s.prompt(), "/docs2 > ");
    assert_eq!(run(&mut s, "touch a.txt"), vec!["File \"a.txt\" created"]);
    assert_eq!(run(&mut s, "cat a.txt"), vec!["(empty)"]);
    assert!(run(&mut s, "cd ...").is_empty());
    assert_eq!(s.cwd(), &VirtualPath::root());
}

#[test]
fn test_cat_caps_whole_file() {
    let row = "x".repeat(100);
    let content = vec![row.as_str(); 30].join("\n");
    let mut fs = VirtualFs::default_tree();
    fs.create_file(&VirtualPath::root(), "big.txt", content).unwrap();
    let mut s = session().with_fs(fs);

    let out = run(&mut s, "cat big.txt");
    let printed: usize = out.iter().map(|row| row.chars().count()).sum();
    // 2000 chars of content, 19 of them newlines
    assert_eq!(out.len(), 20);
    assert_eq!(printed, 1981);
    assert_eq!(out[19].chars().count(), 81);
}

#[test]
fn test_script_round_trip_matches_direct_typing() {
    let mut recorded = session();
    enter(&mut recorded, "script");
    enter(&mut recorded, "mkdir a");
    enter(&mut recorded, "touch a/x");
    enter(&mut recorded, ".");
    enter(&mut recorded, "s1");
    assert!(recorded.mode().is_normal());

    let out = run(&mut recorded, "script run s1");
    assert_eq!(
        out,
        vec![
            "--- RUNNING SCRIPT: s1 ---",
            ">> mkdir a",
            "Folder \"a\" created",
            ">> touch a/x",
            "File \"x\" created",
            "--- SCRIPT FINISHED: s1 ---",
        ]
    );

    let mut typed = session();
    enter(&mut typed, "mkdir a");
    enter(&mut typed, "touch a/x");

    let root = VirtualPath::root();
    assert_eq!(
        recorded.fs().list(&root, "a").unwrap(),
        typed.fs().list(&root, "a").unwrap()
    );
    assert_eq!(recorded.fs().read_file(&root, "s1"), Ok("mkdir a\ntouch a/x"));
}

#[test]
fn test_script_name_keeps_inner_spaces() {
    let mut s = session();
    enter(&mut s, "script");
    enter(&mut s, "echo hi");
    enter(&mut s, ".");
    enter(&mut s, "my  script");
    assert!(s.fs().read_file(&VirtualPath::root(), "my  script").is_ok());

    assert_eq!(
        run(&mut s, "script run   my  script "),
        vec![
            "--- RUNNING SCRIPT: my  script ---",
            ">> echo hi",
            "hi",
            "--- SCRIPT FINISHED: my  script ---",
        ]
    );
    assert_eq!(
        run(&mut s, "script run my script"),
        vec!["Error: Script file 'my script' not found or is a directory."]
    );
}

#[test]
fn test_script_keeps_going_after_bad_lines() {
    let mut s = session();
    enter(&mut s, "script");
    enter(&mut s, "cd docs");
    enter(&mut s, "rm nothing");
    enter(&mut s, "echo still here");
    enter(&mut s, ".");
    enter(&mut s, "s2");

    let out = run(&mut s, "script run s2");
    assert_eq!(
        out,
        vec![
            "--- RUNNING SCRIPT: s2 ---",
            ">> cd docs",
            "[SCRIPT ERROR] Unknown/Non-Executable Command: cd docs",
            ">> rm nothing",
            "Error: \"nothing\" does not exist",
            ">> echo still here",
            "still here",
            "--- SCRIPT FINISHED: s2 ---",
        ]
    );
    assert_eq!(s.cwd(), &VirtualPath::root());
}

#[test]
fn test_missing_script() {
    let mut s = session();
    assert_eq!(
        run(&mut s, "script run nope"),
        vec!["Error: Script file 'nope' not found or is a directory."]
    );
    assert_eq!(
        run(&mut s, "script run docs"),
        vec!["Error: Script file 'docs' not found or is a directory."]
    );
}

#[test]
fn test_script_refused_while_editing() {
    let mut s = session();
    enter(&mut s, "edit readme.txt");
    let before = s.mode().clone();

    s.run_command("script");
    assert_eq!(s.mode(), &before);
    assert_eq!(
        s.output().texts().last().map(String::as_str),
        Some("Error: Cannot enter script mode while another modal session (Edit) is active.")
    );

    // typing `script` while editing just appends the text
    enter(&mut s, "script");
    assert_eq!(s.mode(), &before);
    let content = s.fs().read_file(&VirtualPath::root(), "readme.txt").unwrap();
    assert!(content.ends_with("script\n"));
}

#[test]
fn test_edit_refused_while_recording() {
    let mut s = session();
    enter(&mut s, "script");
    s.run_command("edit readme.txt");
    assert!(matches!(s.mode(), Mode::ScriptCollecting(_)));
    assert_eq!(
        s.output().texts().last().map(String::as_str),
        Some("Error: Cannot enter edit mode while another modal session (Script) is active.")
    );
}

#[test]
fn test_guessing_feedback_is_monotone() {
    let mut s = session();
    enter(&mut s, "guess");
    let target = match s.mode() {
        Mode::Guessing(game) => game.target(),
        other => panic!("unexpected mode {:?}", other),
    };

    let mut guesses = 0;
    for n in 1..target {
        guesses += 1;
        let out = run(&mut s, &n.to_string());
        assert_eq!(out, vec![format!("Too low! Try again. (Guess #{})", guesses)]);
    }
    for n in (target + 1..=100).rev().take(3) {
        guesses += 1;
        let out = run(&mut s, &n.to_string());
        assert_eq!(out, vec![format!("Too high! Try again. (Guess #{})", guesses)]);
    }

    guesses += 1;
    assert_eq!(
        run(&mut s, "0"),
        vec!["Invalid input. Please enter a number between 1 and 100."]
    );
    guesses += 1;
    run(&mut s, "12abc");

    guesses += 1;
    let out = run(&mut s, &target.to_string());
    assert_eq!(
        out,
        vec![format!(
            "CONGRATULATIONS! You guessed the number {} in {} attempts.",
            target, guesses
        )]
    );
    assert!(s.mode().is_normal());
}

#[test]
fn test_loading_and_color_run_beside_typing() {
    let mut s = session();
    assert_eq!(enter(&mut s, "loading"), Some(Effect::StartLoading));
    assert_eq!(enter(&mut s, "colorcycle"), Some(Effect::StartColorCycle));
    assert_eq!(s.tick_loading(), LoadingTick::Running);
    assert!(s.tick_color());

    assert_eq!(run(&mut s, "echo typing"), vec!["typing"]);
    assert_eq!(s.handle_key(Key::Escape), Some(Effect::StopColorCycle));
    assert!(!s.tick_color());

    while s.tick_loading() == LoadingTick::Running {}
    assert_eq!(s.output().texts().last().map(String::as_str), Some("Load complete."));
}

#[test]
fn test_exit_hides_prompt_and_ignores_keys() {
    let mut s = session();
    assert_eq!(enter(&mut s, "exit"), Some(Effect::StartShutdown));
    while s.shutdown_step() {}
    assert!(s.is_halted());
    assert_eq!(
        s.output().texts(),
        vec![
            "Shutting down terminal...",
            "Saving session...",
            "Closing connections...",
            "Goodbye!",
        ]
    );
    assert_eq!(enter(&mut s, "help"), None);
    assert_eq!(s.output().len(), 4);
}

#[test]
fn test_seeded_session_starts_at_root() {
    let s = TerminalSession::with_seed(1);
    assert_eq!(s.prompt(), "/ > ");
    assert!(s.fs().read_file(&VirtualPath::root(), "readme.txt").is_ok());
}
