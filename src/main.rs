use anyhow::Result;
use clap::{CommandFactory, Parser};

use colterm::backends::template::TemplateBackend;
use colterm::backends::xresources::{self, XresourcesBackend};
use colterm::backends::ThemeBackend;
use colterm::cli::Args;
use colterm::pipeline::extract::extract_palette;
use colterm::pipeline::load::load_and_prepare;
use colterm::pipeline::select::select_scheme;
use colterm::preview;
use colterm::tui::{self, TuiApp};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    let Some(source) = args.source() else {
        Args::command().print_help()?;
        return Ok(());
    };

    let pixels = load_and_prepare(source)?;
    let palette = extract_palette(&pixels);

    let mut brightness = args.brightness();
    if args.tui {
        let app = TuiApp::new(palette.clone(), source.to_string(), brightness)?;
        match tui::run(app)? {
            Some(chosen) => brightness = chosen,
            None => {
                log::info!("tuner closed without accepting, nothing written");
                return Ok(());
            }
        }
    }
    let scheme = select_scheme(&palette, brightness)?;

    print!("{}", preview::render(&scheme));

    if args.palette_only {
        return Ok(());
    }

    if let Some(template) = &args.template {
        let backend = TemplateBackend::from_file(template)?;
        let path = backend.install(&scheme, source)?;
        println!("Template written to {}", path.display());
    }

    let xres_path = match &args.export {
        Some(dir) => XresourcesBackend.export(&scheme, source, dir)?,
        None => XresourcesBackend.install(&scheme, source)?,
    };

    if args.no_reload {
        log::info!("skipping xrdb merge of {}", xres_path.display());
    } else {
        xresources::reload(&xres_path)?;
    }
    Ok(())
}
