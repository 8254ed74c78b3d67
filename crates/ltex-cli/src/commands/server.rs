//! Server command implementation

use colored::Colorize;

use ltex_core::ServerLayout;

use crate::context::SyncContext;
use crate::error::Result;

/// Run the server command
pub fn run_server(context: &SyncContext, os: Option<&str>, arch: Option<&str>) -> Result<()> {
    let settings = context.load_settings()?;
    let layout = ServerLayout::new(&context.storage_root, &settings);
    let os = os.unwrap_or(std::env::consts::OS);
    let arch = arch.unwrap_or(std::env::consts::ARCH);

    let installed = if layout.is_installed() {
        "installed".green()
    } else {
        "not installed".yellow()
    };

    println!("{}", "LTeX+ Server".bold());
    println!();
    println!("{}:   {}", "Version".dimmed(), layout.version().cyan());
    println!("{}:    {}", "Status".dimmed(), installed);
    println!("{}: {}", "Directory".dimmed(), layout.server_directory().display());
    println!("{}:  {} ({}/{})", "Archive".dimmed(), layout.download_url(os, arch), os, arch);

    for (name, value) in layout.launch_variables(os) {
        println!("  ${{{}}} = {}", name, value);
    }

    Ok(())
}
