//! List the effect's parameters and distortion modes.

use clap::Args;
use pandamonium_core::{
    DistortionMode, PARAM_MODE, Pandamonium, ParamFlags, ParamUnit, ParameterInfo,
};

#[derive(Args)]
pub struct ParamsArgs {}

pub fn run(_args: ParamsArgs) -> anyhow::Result<()> {
    let effect = Pandamonium::default();

    println!("Parameters:");
    println!("===========");
    println!();
    println!(
        "  {:<8} {:<6} {:>8} {:>8} {:>10}  {}",
        "ID", "NAME", "MIN", "MAX", "DEFAULT", "UNIT"
    );

    for index in 0..effect.param_count() {
        let Some(desc) = effect.param_info(index) else {
            continue;
        };
        let unit = match desc.unit {
            ParamUnit::Decibels => "dB",
            ParamUnit::None if desc.flags.contains(ParamFlags::STEPPED) => "index",
            ParamUnit::None => "-",
        };
        println!(
            "  {:<8} {:<6} {:>8} {:>8} {:>10}  {}",
            desc.string_id,
            desc.short_name,
            desc.min,
            desc.max,
            desc.format_value(desc.default),
            unit
        );
    }

    println!();
    println!("Modes (--mode):");
    println!("===============");
    println!();
    for mode in DistortionMode::ALL {
        println!("  {}  {:<14} {}", mode.index(), mode.id(), mode.name());
    }

    if let Some(desc) = effect.param_info(PARAM_MODE) {
        println!();
        println!("Default mode: {}", desc.format_value(desc.default));
    }

    Ok(())
}
