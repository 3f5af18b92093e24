use crate::api::{error::ApiError, service};
use actix_web::{get, web, Responder};
use balance_gate::{types::Chain, Gate};

#[get("/")]
async fn root() -> impl Responder {
    web::Json(service::Welcome {
        message: service::WELCOME,
    })
}

#[get("/block-number")]
async fn block_number(gate: web::Data<Gate>) -> Result<impl Responder, ApiError> {
    log::info!("block_number");

    let block_number = gate
        .chain_head(Chain::Ethereum)
        .await
        .map_err(ApiError::block_number)?;

    Ok(web::Json(service::BlockNumber { block_number }))
}

#[get("/balance/{address}")]
async fn balance(
    gate: web::Data<Gate>,
    address: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    log::info!("balance - {}", address);

    gate.balance(Chain::Ethereum, &address)
        .await
        .map(|res| web::Json(service::EthBalance::from(res)))
        .map_err(|e| ApiError::eth_balance(&address, e))
}

#[get("/solana-balance/{address}")]
async fn solana_balance(
    gate: web::Data<Gate>,
    address: web::Path<String>,
) -> Result<impl Responder, ApiError> {
    log::info!("solana_balance - {}", address);

    gate.balance(Chain::Solana, &address)
        .await
        .map(|res| web::Json(service::SolBalance::from(res)))
        .map_err(ApiError::sol_balance)
}

#[get("/solana-slot")]
async fn solana_slot(gate: web::Data<Gate>) -> Result<impl Responder, ApiError> {
    log::info!("solana_slot");

    let slot = gate
        .chain_head(Chain::Solana)
        .await
        .map_err(ApiError::slot)?;

    Ok(web::Json(service::Slot { slot }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root)
        .service(block_number)
        .service(balance)
        .service(solana_balance)
        .service(solana_slot);
}
