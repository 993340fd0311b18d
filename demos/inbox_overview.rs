/*
 * Copyright (c) 2025 Engage Client Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate engage;

use anyhow::Result;
use engage::api::MentionListParams;
use engage::Client;
use serde_json::Value;

// Lists the accounts the token can see, then prints the newest inbox
// mentions of the first one.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let access_token = std::env::var("ENGAGE_ACCESS_TOKEN")?;
    let client = Client::with_access_token(&access_token)?;

    let accounts: Value = client
        .get_currently_logged_in_user_accounts(Some(1), None)
        .await?
        .json()?;
    let account_id = accounts["response"]["data"][0]["id"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("no accounts visible for this token"))?
        .to_owned();
    println!("Using account: {account_id}");

    let mentions = client
        .get_mentions_for_account(
            &account_id,
            MentionListParams {
                limit: Some(10),
                ..Default::default()
            },
        )
        .await?;

    println!("{}", String::from_utf8_lossy(&mentions.body));
    Ok(())
}
