use azsign_azure_storage::{
    check, AccessCondition, Config, Credential, RequestSigner, ResourceState, Service,
};
use azsign_core::time::now;
use azsign_core::{OsEnv, Result};
use log::info;

fn main() -> Result<()> {
    // Initialize logging
    let _ = env_logger::builder().is_test(true).try_init();

    // Credentials come from AZURE_STORAGE_CONNECTION_STRING or
    // AZURE_STORAGE_ACCOUNT_NAME / AZURE_STORAGE_ACCOUNT_KEY. Fall back to
    // Azurite so the example runs without an account.
    let mut config = Config::default().from_env(&OsEnv)?;
    let demo_mode = config.account_name.is_none() || config.account_key.is_none();
    if demo_mode {
        println!("No Azure credentials found, using Azurite development storage");
        println!(
            "To use real credentials, set AZURE_STORAGE_ACCOUNT_NAME and AZURE_STORAGE_ACCOUNT_KEY"
        );
        println!();
        config = Config::try_from_connection_string("UseDevelopmentStorage=true", Service::Blob)?;
    }

    let cred: Credential = config.credential()?;
    let endpoint = config
        .endpoint
        .clone()
        .unwrap_or_else(|| format!("https://{}.blob.core.windows.net", cred.account_name()));
    let signer = RequestSigner::new();

    // Example 1: List containers
    println!("Example 1: List containers");
    let (mut parts, _body) = http::Request::get(format!("{endpoint}/?comp=list"))
        .header("x-ms-version", "2009-09-19")
        .body(())
        .expect("request must be valid")
        .into_parts();
    signer.sign_parts(&mut parts, &cred)?;
    println!("Date header: {:?}", parts.headers.get("date"));
    println!("Authorization header: {:?}", parts.headers.get("authorization"));
    println!();

    // Example 2: Overwrite a blob only if it is unchanged
    println!("Example 2: Conditional put");
    let cond = AccessCondition::if_match("0x8CB171BA9E94B0B")?;
    let (mut parts, _body) = http::Request::put(format!("{endpoint}/mycontainer/myblob"))
        .header("x-ms-version", "2009-09-19")
        .header("x-ms-blob-type", "BlockBlob")
        .body(())
        .expect("request must be valid")
        .into_parts();
    cond.apply(&mut parts.headers)?;
    signer.sign_parts(&mut parts, &cred)?;
    println!("If-Match header: {:?}", parts.headers.get("if-match"));
    println!();

    // Example 3: Check the condition locally against a known snapshot
    println!("Example 3: Local precondition check");
    let state = ResourceState::new("0x8D0000000000000", now());
    match check(&cond, &state) {
        Ok(()) => println!("Precondition holds, the put may proceed"),
        Err(err) if err.is_precondition_failed() => {
            info!("precondition failed: {err}");
            println!("Precondition failed, would answer {:?}", err.status_code());
        }
        Err(err) => return Err(err),
    }

    Ok(())
}
