use clap::Subcommand;
use comfy_table::Table;
use prg_core::StateStore;
use std::path::Path;

#[derive(Subcommand)]
pub enum StateCommands {
    /// Show a peer's persisted game state
    Show {
        /// Peer id
        #[arg(short, long)]
        peer: String,
    },
    /// Print the location of a peer's state file
    Path {
        /// Peer id
        #[arg(short, long)]
        peer: String,
    },
}

pub async fn handle_state_command(cmd: StateCommands, data_dir: &Path) -> anyhow::Result<()> {
    let store = StateStore::new(data_dir).await?;

    match cmd {
        StateCommands::Show { peer } => {
            let state = store.load(&peer).await?;

            let mut table = Table::new();
            table.set_header(vec!["Game", "Last answered round"]);
            for (game, round) in &state.prg_history_dict {
                table.add_row(vec![game.to_string(), round.to_string()]);
            }
            println!("{table}");

            match state.prg_last_game_played {
                Some(game) => println!("Last game played: {}", game),
                None => println!("Last game played: none"),
            }
            match state.prg_last_game_claimed {
                Some(game) => println!("Last game claimed: {}", game),
                None => println!("Last game claimed: none"),
            }
            if let Some(pending) = state.pending_claim() {
                println!("Pending claim: game {}", pending);
            }
        }
        StateCommands::Path { peer } => {
            println!("{}", store.state_path(&peer).display());
        }
    }

    Ok(())
}
