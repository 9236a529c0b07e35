//! `cardapio get` — Print one menu item.

use cardapio_client::api::ItemCardapioApi;
use cardapio_client::rest::RestClient;
use cardapio_common::config::ClientConfig;
use cardapio_common::types::ItemCardapioId;
use clap::Args;

use crate::output;

/// Arguments for the `get` command.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Menu item id.
    pub id: String,

    /// Print the raw JSON record instead of the field table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `get` command.
///
/// # Errors
///
/// Returns an error if the item cannot be fetched.
pub fn execute(args: GetArgs, config: ClientConfig) -> anyhow::Result<()> {
    let client = RestClient::new(config)?;
    let item = client.get_entity(&ItemCardapioId::new(args.id))?;
    if args.json {
        println!("{}", output::to_json(&item)?);
    } else {
        print!("{}", output::format_fields(&item));
    }
    Ok(())
}
