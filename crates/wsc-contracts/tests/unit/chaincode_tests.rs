//! Chaincode assembly and invocation routing

use serde_json::{Value, json};

use wsc_contracts::{BuildError, Chaincode, ChaincodeInfo, DongContract, RrContract};
use wsc_domain::error::Error;

use crate::support::empty_fixture;

fn two_contract_chaincode() -> Chaincode {
    Chaincode::builder()
        .with_info(ChaincodeInfo::new("rr chaincode", "0.0.1"))
        .register(RrContract::new())
        .register(DongContract::new())
        .build()
        .unwrap()
}

#[tokio::test]
async fn qualified_names_route_to_their_contracts() {
    let (memory, ctx) = empty_fixture();
    let chaincode = two_contract_chaincode();

    chaincode
        .invoke(
            &ctx,
            "RrContract:CreateRr",
            &["key001".to_string(), "some value".to_string()],
        )
        .await
        .unwrap();
    chaincode
        .invoke(
            &ctx,
            "DongContract:CreateDong",
            &[
                "dong001".to_string(),
                "dong-7".to_string(),
                "gold dong".to_string(),
                "token-abc".to_string(),
            ],
        )
        .await
        .unwrap();

    assert_eq!(memory.len(), 2);
    let read = chaincode
        .invoke(&ctx, "RrContract:ReadRr", &["key001".to_string()])
        .await
        .unwrap();
    assert_eq!(read, Some(json!({"value": "some value"})));
}

#[tokio::test]
async fn bare_names_fall_through_to_the_default_contract() {
    let (_, ctx) = empty_fixture();
    let chaincode = two_contract_chaincode();

    chaincode
        .invoke(
            &ctx,
            "CreateRr",
            &["key001".to_string(), "some value".to_string()],
        )
        .await
        .unwrap();
    let present = chaincode
        .invoke(&ctx, "RrExists", &["key001".to_string()])
        .await
        .unwrap();
    assert_eq!(present, Some(Value::Bool(true)));
}

#[tokio::test]
async fn the_default_contract_can_be_chosen_explicitly() {
    let (_, ctx) = empty_fixture();
    let chaincode = Chaincode::builder()
        .register(RrContract::new())
        .register(DongContract::new())
        .with_default_contract("DongContract")
        .build()
        .unwrap();

    chaincode
        .invoke(
            &ctx,
            "CreateDong",
            &[
                "dong001".to_string(),
                "dong-7".to_string(),
                "gold dong".to_string(),
                "token-abc".to_string(),
            ],
        )
        .await
        .unwrap();
    let present = chaincode
        .invoke(&ctx, "DongExists", &["dong001".to_string()])
        .await
        .unwrap();
    assert_eq!(present, Some(Value::Bool(true)));
}

#[tokio::test]
async fn unknown_contracts_are_reported_with_the_registered_names() {
    let (_, ctx) = empty_fixture();
    let chaincode = two_contract_chaincode();
    let err = chaincode
        .invoke(&ctx, "AssetContract:CreateAsset", &["key001".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownContract { .. }));
    let text = err.to_string();
    assert!(text.contains("AssetContract"));
    assert!(text.contains("RrContract"));
    assert!(text.contains("DongContract"));
}

#[tokio::test]
async fn unknown_operations_are_reported_by_the_contract() {
    let (_, ctx) = empty_fixture();
    let chaincode = two_contract_chaincode();
    let err = chaincode
        .invoke(&ctx, "RrContract:TransferRr", &["key001".to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownOperation { .. }));
}

#[test]
fn building_without_contracts_is_refused() {
    let err = Chaincode::builder().build().unwrap_err();
    assert!(matches!(err, BuildError::NoContracts));
}

#[test]
fn duplicate_registration_is_refused() {
    let err = Chaincode::builder()
        .register(RrContract::new())
        .register(RrContract::new())
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::DuplicateContract(name) if name == "RrContract"));
}

#[test]
fn an_unregistered_default_is_refused() {
    let err = Chaincode::builder()
        .register(RrContract::new())
        .with_default_contract("DongContract")
        .build()
        .unwrap_err();
    assert!(matches!(err, BuildError::UnknownDefault(name) if name == "DongContract"));
}

#[test]
fn metadata_lists_every_contract_and_operation() {
    let chaincode = two_contract_chaincode();
    assert_eq!(chaincode.contract_names(), ["RrContract", "DongContract"]);

    let metadata = chaincode.metadata();
    assert_eq!(metadata["info"]["title"], "rr chaincode");
    assert_eq!(metadata["info"]["version"], "0.0.1");
    assert_eq!(metadata["defaultContract"], "RrContract");

    let contracts = metadata["contracts"].as_array().unwrap();
    assert_eq!(contracts.len(), 2);
    assert_eq!(contracts[0]["name"], "RrContract");
    assert_eq!(contracts[0]["info"]["title"], "Rr contract");
    assert_eq!(
        contracts[0]["operations"],
        json!(["RrExists", "CreateRr", "ReadRr", "UpdateRr", "DeleteRr"])
    );
    assert_eq!(contracts[1]["name"], "DongContract");
}
