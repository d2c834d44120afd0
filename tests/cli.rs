use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn best_preset_reaches_end() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["--preset", "best", "--pace", "none"]);

    cmd.assert()
        .success()
        .stdout(str::contains("X0EX\n"))
        .stdout(str::contains("Reached the end in 1 step(s) after visiting 2 cell(s)."));
}

#[test]
fn unreachable_preset_is_reported() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["--preset", "unreachable", "--pace", "none"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Destination cannot be reached."));
}

#[test]
fn maze_file_prints_final_trail() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["mazes/jagged.txt", "--pace", "none"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Sv\nXv\nX>>E\n"))
        .stdout(str::contains("Reached the end in 5 step(s)"));
}

#[test]
fn maze_without_end_is_invalid_input() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["mazes/no_end.txt", "--pace", "none"]);

    cmd.assert()
        .success()
        .stdout(str::contains("Invalid Input"))
        .stdout(str::contains("XS  X").not())
        .stderr(str::contains("No end position in maze."));
}

#[test]
fn bad_maze_file_fails() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["mazes/bad_char.txt", "--pace", "none"]);

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read maze from given file"));
}

#[test]
fn menu_runs_chosen_maze_until_exit() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["--pace", "none"]).write_stdin("7\nabc\n1\n-1\n");

    cmd.assert()
        .success()
        .stdout(str::contains("Choose a maze:"))
        .stdout(str::contains("4. Worst Case (Unreachable Destination)"))
        .stdout(str::contains("XS0X\n"));
}

#[test]
fn prompt_pace_waits_for_each_frame() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.arg("--preset").arg("best").write_stdin("\n\n");

    cmd.assert()
        .success()
        .stdout(str::contains("X0EX\nXXXX\n\nEnter >>\n"))
        .stdout(str::contains("XS0X\nXXXX\n\nEnter >>\n"));
}

#[test]
fn clear_flag_clears_before_each_frame() {
    let mut cmd = Command::cargo_bin("maze_walk").unwrap();
    cmd.args(["--preset", "best", "--pace", "none", "--clear"]);

    cmd.assert()
        .success()
        .stdout(str::contains("\x1b[2J"))
        .stdout(str::contains("X0EX\n"));
}
