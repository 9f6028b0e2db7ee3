//! The `generate` subcommand: build a styling state from flags and dispatch
//! to the generator selected by the output format id.

use anyhow::{anyhow, bail, Result};

use termstyle::banner::{render_banner, FigletRenderer};
use termstyle::cli::GenerateArgs;
use termstyle::render::{ansi, effects, preview};
use termstyle::style::{Rgb, StyleState};
use termstyle::{formats, presets, shell, Config};

/// Assemble the styling state: preset first (when given), then flag
/// overrides on top.
fn build_state(args: &GenerateArgs) -> Result<StyleState> {
    let mut state = match &args.preset {
        Some(id) => presets::find(id)
            .ok_or_else(|| {
                anyhow!(
                    "Unknown preset '{}'. Run `termstyle presets` to list them.",
                    id
                )
            })?
            .to_state(),
        None => StyleState::default(),
    };

    if let Some(text) = &args.text {
        state.raw_text = text.clone();
    }
    if let Some(color) = &args.color {
        state.text_color = color.clone();
    }
    if let Some(background) = &args.background {
        state.background_color = background.clone();
    }
    if args.bold {
        state.styles.bold = true;
    }
    if args.italic {
        state.styles.italic = true;
    }
    if args.underline {
        state.styles.underline = true;
    }

    Ok(state)
}

/// Parse a gradient endpoint, preferring the flag over the configured value.
fn gradient_color(flag: &Option<String>, configured: &str, which: &str) -> Result<Rgb> {
    let value = flag.as_deref().unwrap_or(configured);
    value
        .parse()
        .map_err(|e| anyhow!("invalid gradient {} color '{}': {}", which, value, e))
}

/// Render the banner, optionally wrapped in a shell command.
fn generate_banner(args: &GenerateArgs, state: &StyleState, config: &Config) -> Result<String> {
    let font = args.font.as_deref().unwrap_or(&config.banner_font);
    let renderer = FigletRenderer::new().map_err(|e| anyhow!("figlet setup failed: {}", e))?;
    let art = render_banner(&renderer, &state.raw_text, font);

    match args.wrap.as_deref() {
        None => Ok(art),
        Some("bash") => Ok(shell::bash::banner_command(&art)),
        Some("python") => Ok(shell::python::banner_command(&art)),
        Some("powershell") => Ok(shell::powershell::banner_command(&art)),
        Some(other) => bail!(
            "Unknown wrap target '{}'. Expected bash, python or powershell.",
            other
        ),
    }
}

pub fn handle(args: GenerateArgs) -> Result<()> {
    let config = Config::load()?;
    let state = build_state(&args)?;

    let format_id = args.format.as_deref().unwrap_or(&config.default_format);
    let format = formats::find(format_id).ok_or_else(|| {
        anyhow!(
            "Unknown output format '{}'. Run `termstyle formats` to list them.",
            format_id
        )
    })?;

    let output = match format.id {
        "ansi" => ansi::escape_sequence(&state),
        "bash" => shell::bash::echo_command(&state),
        "python" => shell::python::print_command(&state),
        "powershell" => shell::powershell::write_host_command(&state),
        "preview" => preview::styled_span(&state),
        "rainbow" => {
            if args.markup {
                preview::rainbow_spans(&state.raw_text)
            } else {
                effects::rainbow(&state.raw_text)
            }
        }
        "gradient" => {
            let start = gradient_color(&args.gradient_start, &config.gradient_start, "start")?;
            let end = gradient_color(&args.gradient_end, &config.gradient_end, "end")?;
            if args.markup {
                preview::gradient_spans(&state.raw_text, start, end)
            } else {
                effects::gradient(&state.raw_text, start, end)
            }
        }
        "banner" => generate_banner(&args, &state, &config)?,
        // the catalog and this dispatch are maintained together
        other => bail!("format '{}' has no generator", other),
    };

    // Blank input yields empty output; print nothing rather than a bare newline
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
