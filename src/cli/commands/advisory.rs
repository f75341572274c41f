use crate::advisory::{Crop, Region};
use crate::cli::commands::CommandDefinition;
use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell_context::{CommandResult, ShellContext};
use crate::session::Action;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "weather",
            "Simulated forecast for a region",
            "weather [region]",
            cmd_weather,
        ),
        CommandDefinition::new(
            "crops",
            "Cultivation tips for a crop",
            "crops [crop]",
            cmd_crops,
        ),
    ]
}

fn cmd_weather(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        let region: Region = args.join(" ").parse()?;
        return context.apply(Action::ShowWeather(region));
    }
    if context.is_interactive() {
        return show_weather_picker(context);
    }
    list_choices("Regions", Region::ALL.iter().map(|region| (region.slug(), region.label())));
    Ok(())
}

fn cmd_crops(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if !args.is_empty() {
        let crop: Crop = args.join(" ").parse()?;
        return context.apply(Action::ShowCropAdvice(crop));
    }
    if context.is_interactive() {
        return show_crop_picker(context);
    }
    list_choices("Crops", Crop::ALL.iter().map(|crop| (crop.slug(), crop.label())));
    Ok(())
}

pub(crate) fn show_weather_picker(context: &mut ShellContext) -> CommandResult {
    if let Some(region) = forms::select_region(&context.theme)? {
        context.apply(Action::ShowWeather(region))?;
    }
    Ok(())
}

pub(crate) fn show_crop_picker(context: &mut ShellContext) -> CommandResult {
    if let Some(crop) = forms::select_crop(&context.theme)? {
        context.apply(Action::ShowCropAdvice(crop))?;
    }
    Ok(())
}

fn list_choices<'a>(title: &str, choices: impl Iterator<Item = (&'a str, &'a str)>) {
    output::section(title);
    for (slug, label) in choices {
        output::info(format!("{slug:<16} {label}"));
    }
}
