use clap::Args;

use super::output;
use crate::infra::github::ResourceClient;

/// Fetch a follow-on API resource by URL.
#[derive(Args, Clone, PartialEq, Eq)]
pub struct FetchArgs {
    /// Absolute API URL, e.g. a repository's `languages_url`
    pub url: String,
}

pub async fn run(args: &FetchArgs, client: &impl ResourceClient, token: &str) -> anyhow::Result<()> {
    print!("{}", render(args, client, token).await?);
    Ok(())
}

async fn render(args: &FetchArgs, client: &impl ResourceClient, token: &str) -> anyhow::Result<String> {
    let value = client.get_resource(&args.url, token).await?;
    output::json(&value)
}
