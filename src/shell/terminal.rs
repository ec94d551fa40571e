use crate::shell::animation::{FrameClock, Rgb, TitleAnimation};
use crate::shell::state::{AppState, Field};
use crate::shell::view::{render, TITLE};
use crate::units::{Unit, SUFFIXES};
use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use log::debug;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

const HELP: &str = "\
Commands:
  want <number> [unit]   set the goal
  have <number> [unit]   set the current power
  tick <number> [unit]   set the power gained per tick
  gamepass yes|no        toggle the X2 gamepass
  calc                   calculate the time to goal
  lang                   switch language
  credits                show the credits
  units                  list unit suffixes
  show                   redraw the form
  quit                   leave";

/// Whether the command loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-driven form: each command edits the state and the form is redrawn
pub fn run_shell<R: BufRead, W: Write>(
    state: &mut AppState,
    animation: &TitleAnimation,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    let started = Instant::now();
    draw(state, animation.color_at(started.elapsed()), out)?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let flow = handle_command(state, &line, out)?;
        if flow == Flow::Quit {
            break;
        }
        if redraws(&line) {
            draw(state, animation.color_at(started.elapsed()), out)?;
        }
    }

    Ok(())
}

fn redraws(line: &str) -> bool {
    matches!(
        line.split_whitespace().next(),
        Some("want" | "have" | "tick" | "gamepass" | "calc" | "lang" | "show")
    )
}

/// Apply one command to the state
pub fn handle_command<W: Write>(
    state: &mut AppState,
    line: &str,
    out: &mut W,
) -> io::Result<Flow> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Flow::Continue);
    };
    let args: Vec<&str> = words.collect();
    debug!("Shell command '{}' {:?}", command, args);

    match command {
        "want" | "have" | "tick" => {
            let field: Field = command.parse().map_err(io::Error::other)?;
            set_field(state, field, &args, out)?;
        }
        "gamepass" => match args.first().map(|a| a.to_ascii_lowercase()) {
            Some(ref choice) if choice == "yes" => state.set_double_rate(true),
            Some(ref choice) if choice == "no" => state.set_double_rate(false),
            _ => writeln!(out, "Usage: gamepass yes|no")?,
        },
        "calc" => {
            state.calculate();
        }
        "lang" => state.toggle_locale(),
        "credits" => {
            let labels = state.labels();
            writeln!(out, "{}\n\n{}", labels.credits_title, labels.credits_message)?;
        }
        "units" => write_units(out)?,
        "show" => {}
        "help" => writeln!(out, "{}", HELP)?,
        "quit" | "exit" => return Ok(Flow::Quit),
        other => writeln!(out, "Unknown command '{}'. Type 'help' for commands.", other)?,
    }

    Ok(Flow::Continue)
}

fn set_field<W: Write>(
    state: &mut AppState,
    field: Field,
    args: &[&str],
    out: &mut W,
) -> io::Result<()> {
    if let Some(suffix) = args.get(1) {
        match Unit::from_suffix(suffix) {
            Some(unit) => state.field_mut(field).unit = unit,
            None => {
                writeln!(
                    out,
                    "Unknown unit '{}'. Choose one of: {}",
                    suffix,
                    SUFFIXES[1..].join(" ")
                )?;
                return Ok(());
            }
        }
    }

    let entry = &mut state.field_mut(field).entry;
    entry.clear();
    let rejected = entry.type_text(args.first().copied().unwrap_or(""));
    if rejected > 0 {
        writeln!(out, "Ignored {} invalid keystroke(s)", rejected)?;
    }
    Ok(())
}

/// Print the whole form with a coloured title
pub fn draw<W: Write>(state: &AppState, title_color: Rgb, out: &mut W) -> io::Result<()> {
    let lines = render(state).to_lines();
    for (index, line) in lines.iter().enumerate() {
        if index == 1 {
            write_colored(out, line, title_color)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    out.flush()
}

pub fn write_units<W: Write>(out: &mut W) -> io::Result<()> {
    for unit in Unit::all() {
        let suffix = if unit.suffix().is_empty() { "-" } else { unit.suffix() };
        writeln!(out, "{:>2}  {:<5} 1e{}", unit.index(), suffix, unit.index() * 3)?;
    }
    Ok(())
}

fn write_colored<W: Write>(out: &mut W, text: &str, color: Rgb) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }),
        Print(text),
        ResetColor
    )
}

/// Redraw the title in place on every frame until `duration` has passed
///
/// Returns the number of frames drawn.
pub fn play_title<W: Write>(
    out: &mut W,
    animation: &TitleAnimation,
    clock: &mut FrameClock,
    duration: Duration,
) -> io::Result<u64> {
    let mut frames = 0;
    let mut elapsed = clock.elapsed();

    while elapsed < duration {
        queue!(out, MoveToColumn(0))?;
        write_colored(out, TITLE, animation.color_at(elapsed))?;
        out.flush()?;
        frames += 1;
        elapsed = clock.wait_next();
    }

    writeln!(out)?;
    debug!("Title animation drew {} frames", frames);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use std::io::Cursor;

    fn run(script: &str) -> (AppState, String) {
        let mut state = AppState::default();
        let mut out = Vec::new();
        run_shell(
            &mut state,
            &TitleAnimation::default(),
            Cursor::new(script.to_string()),
            &mut out,
        )
        .unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_calculation() {
        let (state, out) = run("want 2 M\ntick 1 M\ngamepass yes\ncalc\nquit\n");
        assert_eq!(state.result_text(), "Time: 0h 0m 1s");
        assert!(out.contains("Time: 0h 0m 1s"));
        assert!(out.contains("X2 Gamepass? Yes"));
    }

    #[test]
    fn test_keystroke_filter_applies() {
        let (state, out) = run("want 12a.5.3\n");
        assert_eq!(state.want.entry.text(), "12.53");
        assert!(out.contains("Ignored 2 invalid keystroke(s)"));
    }

    #[test]
    fn test_negative_entry_is_filtered() {
        let (state, _) = run("have -5\n");
        assert_eq!(state.have.entry.text(), "5");
    }

    #[test]
    fn test_unknown_unit_keeps_field() {
        let (state, out) = run("want 3 Zz\n");
        assert_eq!(state.want.unit.suffix(), "B");
        assert_eq!(state.want.entry.text(), "");
        assert!(out.contains("Unknown unit 'Zz'"));
    }

    #[test]
    fn test_zero_rate_reports_error() {
        let (state, out) = run("want 1\ncalc\n");
        assert_eq!(state.result_text(), "Error: division by zero");
        assert!(out.contains("Error: division by zero"));
    }

    #[test]
    fn test_lang_toggle_and_credits() {
        let (state, out) = run("lang\ncredits\n");
        assert_eq!(state.locale, Locale::Spanish);
        assert!(out.contains("[ENG] [Créditos]"));
        assert!(out.contains("pero por favor no quites los créditos :)"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (state, _) = run("quit\nlang\n");
        assert_eq!(state.locale, Locale::English);
    }

    #[test]
    fn test_unknown_command() {
        let (_, out) = run("fly\n");
        assert!(out.contains("Unknown command 'fly'"));
    }

    #[test]
    fn test_title_is_colored() {
        let mut out = Vec::new();
        draw(&AppState::default(), Rgb { r: 255, g: 102, b: 102 }, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[38;2;255;102;102m"));
        assert!(text.contains(TITLE));
    }

    #[test]
    fn test_units_listing() {
        let mut out = Vec::new();
        write_units(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), SUFFIXES.len());
        assert!(text.contains(" 3  B     1e9"));
    }

    #[test]
    fn test_play_title_draws_frames() {
        let mut out = Vec::new();
        let mut clock = FrameClock::new(Duration::from_millis(1));
        let frames = play_title(
            &mut out,
            &TitleAnimation::default(),
            &mut clock,
            Duration::from_millis(10),
        )
        .unwrap();
        assert!(frames >= 1);
        assert!(String::from_utf8(out).unwrap().contains(TITLE));
    }
}
