use crate::app::{AppModel, Outcome};
use crate::events::AppEvent;
use crate::item::ExecCommand;
use crate::render;
use std::io::{BufRead, Write};
use std::process::{Child, Command, Stdio};

/// How selected commands are carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    Spawn,
    DryRun,
}

fn launch(command: &ExecCommand, mode: Launch) -> std::io::Result<Option<Child>> {
    if mode == Launch::DryRun {
        return Ok(None);
    }
    let child = Command::new("sh")
        .arg("-c")
        .arg(command.as_str())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(Some(child))
}

/// Drops children that have exited, collecting their status.
fn reap(children: &mut Vec<Child>) {
    children.retain_mut(|child| match child.try_wait() {
        Ok(Some(status)) => {
            log::debug!("Command {} exited with {}", child.id(), status);
            false
        }
        Ok(None) => true,
        Err(e) => {
            log::warn!("Failed to poll command {}: {}", child.id(), e);
            false
        }
    });
}

/// Drives the model from line commands until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    model: &mut AppModel,
    input: R,
    mut output: W,
    mode: Launch,
) -> anyhow::Result<()> {
    write!(output, "{}", render::draw(model.menu())?)?;
    let mut children = Vec::new();

    for line in input.lines() {
        reap(&mut children);
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<AppEvent>() {
            Ok(event) => event,
            Err(e) => {
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        match model.update(event) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Redraw) => write!(output, "{}", render::draw(model.menu())?)?,
            Ok(Outcome::Run(command)) => {
                writeln!(output, "run: {}", command)?;
                match launch(&command, mode) {
                    Ok(child) => children.extend(child),
                    Err(e) => {
                        log::error!("Failed to run '{}': {}", command, e);
                        writeln!(output, "error: {}", e)?;
                    }
                }
            }
            Ok(Outcome::Idle) => {}
            Err(e) => {
                log::error!("{}", e);
                writeln!(output, "error: {}", e)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CONFIG, from_toml_str};
    use std::io::Cursor;

    fn session(script: &str) -> (AppModel, String) {
        let config = from_toml_str(DEFAULT_CONFIG).unwrap();
        let mut model = AppModel::new(&config, None).unwrap();
        let mut out = Vec::new();
        run(&mut model, Cursor::new(script), &mut out, Launch::DryRun).unwrap();
        (model, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_session_navigates_and_reports() {
        let (model, out) = session("select 0\nselect 0\nbogus\nback\nquit\nselect 1\n");

        assert!(out.contains("run: xdg-open ~"));
        assert!(out.contains("error: Unknown command 'bogus'"));
        assert_eq!(model.menu().pie().labels(), vec!["Files", "Tools", "Terminal", "Browser"]);
        assert_eq!(out.matches("ring ⌀").count(), 3);
    }

    #[test]
    fn test_finished_commands_are_reaped() {
        let mut children = vec![
            launch(&ExecCommand::from("true"), Launch::Spawn)
                .unwrap()
                .unwrap(),
        ];
        assert!(
            launch(&ExecCommand::from("true"), Launch::DryRun)
                .unwrap()
                .is_none()
        );

        for _ in 0..100 {
            reap(&mut children);
            if children.is_empty() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
        assert!(children.is_empty());
    }

    #[test]
    fn test_session_reports_failed_updates() {
        let (_, out) = session("angle nan\n");
        assert!(out.contains("error: Invalid start angle"));
    }
}
