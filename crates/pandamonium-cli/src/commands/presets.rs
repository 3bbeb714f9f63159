//! Preset management commands.
//!
//! Provides commands to list, show and save presets.

use super::common::{ParamOverrides, load_preset};
use clap::{Args, Subcommand};
use pandamonium_config::{
    Preset, ensure_user_presets_dir, factory_presets, is_factory_preset, list_user_presets,
    preset_name_from_path, user_config_dir, user_preset_path, user_presets_dir, validate_preset,
};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show details of a preset
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a parameter set as a user preset
    Save {
        /// Name for the new preset
        name: String,

        #[command(flatten)]
        params: ParamOverrides,

        /// Description of the preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite if preset already exists
        #[arg(long)]
        force: bool,
    },

    /// Show preset directories
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => list_presets(factory, user),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            params,
            description,
            force,
        } => save_preset(&name, &params, description.as_deref(), force),
        PresetsCommand::Paths => show_paths(),
    }
}

fn list_presets(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    let show_factory = !user_only;
    let show_user = !factory_only;

    if show_factory {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:20} - {}", preset.name, desc);
        }
        println!();
    }

    if show_user {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create a preset with: pandamonium presets save <name> --gain 12 --mode soft-clip\n");
        } else {
            for path in user_presets {
                let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".to_string());

                match Preset::load(&path) {
                    Ok(preset) => {
                        let desc = preset.description.as_deref().unwrap_or("");
                        println!("  {:20} - {}", name, desc);
                    }
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "failed to load user preset");
                        println!("  {:20} - (error loading)", name);
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    println!();

    if let Some(desc) = &preset.description {
        println!("Description: {}", desc);
        println!();
    }

    println!("  Gain:   {:.1} dB", preset.gain_db);
    println!("  Fuzz:   {:.1}", preset.fuzz);
    println!("  Volume: {:.1} dB", preset.volume_db);
    println!("  Mode:   {}", preset.mode);
    println!();

    if let Err(err) = validate_preset(&preset) {
        println!("Warning: {err} (values are clamped when used)");
        println!();
    }

    println!("Command-line flags:");
    println!(
        "  --gain {} --fuzz {} --volume {} --mode {}",
        preset.gain_db,
        preset.fuzz,
        preset.volume_db,
        preset.mode.id()
    );

    Ok(())
}

fn save_preset(
    name: &str,
    params: &ParamOverrides,
    description: Option<&str>,
    force: bool,
) -> anyhow::Result<()> {
    if is_factory_preset(name) {
        anyhow::bail!(
            "'{}' is a factory preset name. Choose a different name.",
            name
        );
    }

    let preset_path = user_preset_path(name)?;
    ensure_user_presets_dir()?;

    if preset_path.exists() && !force {
        anyhow::bail!(
            "Preset '{}' already exists. Use --force to overwrite.",
            name
        );
    }

    let snapshot = params.apply(Default::default())?;
    let mut preset = Preset::from_snapshot(name, &snapshot);
    if let Some(desc) = description {
        preset = preset.with_description(desc);
    }

    preset.save(&preset_path)?;

    println!("Saved preset '{}' to {}", name, preset_path.display());
    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    println!("Preset Directories:");
    println!("===================");
    println!();
    println!("User presets:   {}", user_presets_dir().display());
    println!("Config dir:     {}", user_config_dir().display());

    Ok(())
}
