use anyhow::Context;
use clap::Args;
use prg_core::{GameConfig, HttpCoordinator, RoundObservation, StateStore, TestOverrides};
use prg_game::{FixedAnswer, GameTracker};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args)]
pub struct RunArgs {
    /// Peer id to play as
    #[arg(short, long)]
    pub peer: String,

    /// JSONL file of round observations, one per line (stdin if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Coordinator proxy URL
    #[arg(long)]
    pub coordinator_url: Option<String>,

    /// Organization id sent with every coordinator call
    #[arg(long)]
    pub org_id: Option<String>,

    /// Test only: fixed bet in wei, bypassing the computed amount
    #[arg(long, hide = true)]
    pub override_bet: Option<u64>,

    /// Test only: fixed balance in wei, bypassing the coordinator lookup
    #[arg(long, hide = true)]
    pub override_balance: Option<u64>,
}

pub async fn handle_run_command(args: RunArgs, data_dir: &Path) -> anyhow::Result<()> {
    let config = GameConfig {
        enabled: true,
        coordinator_url: args.coordinator_url,
        org_id: args.org_id,
        log_dir: data_dir.to_path_buf(),
        overrides: TestOverrides {
            bet_amount: args.override_bet.map(u128::from),
            token_balance: args.override_balance.map(u128::from),
        },
    };

    let endpoint = match config.resolve() {
        Some(endpoint) => endpoint,
        None => {
            println!("PRG game disabled: coordinator URL and org id are required");
            return Ok(());
        }
    };

    let store = StateStore::new(&config.log_dir).await?;
    let coordinator = Arc::new(HttpCoordinator::new(endpoint));
    let mut tracker = GameTracker::new(
        coordinator,
        store,
        Box::new(FixedAnswer::default()),
        config.overrides,
    );

    let raw = match &args.input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut processed = 0usize;
    for (lineno, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let observation: RoundObservation = serde_json::from_str(line)
            .with_context(|| format!("Bad observation on line {}", lineno + 1))?;
        tracker.observe(observation, &args.peer).await?;
        processed += 1;
    }

    println!("Processed {} observations for peer {}", processed, args.peer);
    if let Some(state) = tracker.state() {
        println!(
            "Last game played: {:?}, last game claimed: {:?}",
            state.prg_last_game_played, state.prg_last_game_claimed
        );
    }
    Ok(())
}
