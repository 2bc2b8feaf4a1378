use anyhow::{Context, Result};
use rank_treap::driver;
use rank_treap::options::Options;
use rank_treap::treap::RankedTreap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

fn main() -> Result<()> {
    if std::env::var("RANK_TREAP_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("RANK_TREAP_LOG")
            .write_style("RANK_TREAP_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = match Options::parse_from_args(std::env::args_os().skip(1)) {
        Ok(options) => options,
        Err(err) => err.exit(),
    };
    log::debug!("options: {:?}", options);

    let seed = options.seed.unwrap_or_else(rand::random);
    log::debug!("priority seed: {}", seed);
    let mut treap = RankedTreap::with_seed(seed);

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());
    let executed = match options.input {
        Some(ref path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            driver::run(BufReader::new(file), output, &mut treap)
        },
        None => {
            let stdin = io::stdin();
            driver::run(stdin.lock(), output, &mut treap)
        },
    }
    .context("failed to execute commands")?;

    log::debug!("executed {} commands, {} keys remain", executed, treap.len());
    Ok(())
}
