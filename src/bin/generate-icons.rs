use std::ffi::OsString;

use wondericons::{args, error::IconError, help, job::GenerationJob};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    help::maybe_print_help_and_exit("generate-icons");
    let arguments: Vec<_> = std::env::args_os().collect();

    if let Err(e) = real_main(arguments) {
        eprintln!("error generating icons: {}", e);
        std::process::exit(1);
    }
}

fn real_main(args: Vec<OsString>) -> Result<(), IconError> {
    let config = args::parse_args(args)?;
    let job = GenerationJob::new(config)?;

    let report = job.run_with_progress(|artifact| {
        println!(
            "generated {} ({}x{})",
            artifact.path.display(),
            artifact.size,
            artifact.size
        );
    })?;

    println!(
        "all {} icons generated successfully in {}",
        report.artifacts.len(),
        report.output_dir.display()
    );
    Ok(())
}
