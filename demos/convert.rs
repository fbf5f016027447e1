use artii::{Library, Session};
use clap::Parser;
use std::path::PathBuf;

/// Convert art from an `ascii-art-files` directory into png and hex files.
#[derive(Parser, Debug)]
#[command(name = "convert", about = "Convert ascii art into png and hex color files")]
struct Cli {
    /// Directory holding `ascii-art-files/`
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Art to convert; the built-in art is used when omitted
    name: Option<String>,

    /// List available art and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> artii::Result<()> {
    let cli = Cli::parse();
    let library = Library::new(&cli.root);

    if cli.list {
        for name in library.available_art()? {
            println!("[*] {}", name);
        }
        return Ok(());
    }

    let session = match &cli.name {
        Some(name) if !library.art_exists(name)? => {
            eprintln!("no art named '{}' in {}", name, cli.root.display());
            std::process::exit(1);
        }
        Some(name) => library.load_session(name)?,
        None => Session::default(),
    };

    println!("{}", session.art());
    print!("{}", session.info());

    let conversion = session.convert()?;
    library.ensure_output_dirs()?;
    let png = library.png_path(session.name());
    let hex = library.hex_path(session.name());
    conversion.save_png(&png)?;
    conversion.save_hex(&hex)?;
    println!("saved {}", png.display());
    println!("saved {}", hex.display());
    Ok(())
}
