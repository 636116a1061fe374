use clap::Parser;
use fontinject::{FontFamilyInjectionPlugin, InjectionConfig, InjectionError, InjectionOrder};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Inject @font-face rules for the font families a stylesheet uses")]
struct Args {
    /// Stylesheet to transform
    input: PathBuf,

    /// JSON file mapping family names to font faces
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the result (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write `<output>.map`
    #[arg(long, requires = "output")]
    source_map: bool,

    /// Injection order, overriding the config file
    #[arg(long)]
    order: Option<InjectionOrder>,
}

fn main() -> Result<(), InjectionError> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InjectionConfig::from_file(path)?,
        None => InjectionConfig::default(),
    };
    let order = args.order.unwrap_or(config.order);
    let plugin = FontFamilyInjectionPlugin::new(config.into_resolver()?).with_order(order);

    let code = fs::read_to_string(&args.input).map_err(|e| {
        InjectionError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read '{}': {}", args.input.display(), e),
        ))
    })?;
    let id = args.input.display().to_string();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(plugin.transform(&code, &id))?;

    let text = output.as_ref().map_or(code.as_str(), |o| o.code.as_str());
    match &args.output {
        Some(path) => {
            fs::write(path, text)?;
            info!("Wrote {}", path.display());
            if args.source_map {
                if let Some(output) = &output {
                    let mut map = output.map.clone();
                    map.file = path.file_name().map(|name| name.to_string_lossy().into_owned());
                    let mut map_path = path.clone().into_os_string();
                    map_path.push(".map");
                    fs::write(&map_path, map.to_json()?)?;
                    info!("Wrote {}", PathBuf::from(map_path).display());
                }
            }
        }
        None => io::stdout().write_all(text.as_bytes())?,
    }

    if output.is_none() {
        info!("{}: nothing to inject", id);
    }
    Ok(())
}
