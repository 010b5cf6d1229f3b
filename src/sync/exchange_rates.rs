use crate::config::Chain;
use crate::sync::schedule::{daily_timestamps, human_timestamp, next_day_timestamps};
use crate::utils::app_context::AppContext;
use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::network::Ethereum;
use alloy::primitives::{address, Address, U256};
use alloy::providers::{Provider, RootProvider};
use alloy::sol;
use alloy::rpc::types::BlockTransactionsKind;
use chrono::Utc;
use eyre::{eyre, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use serde::Serialize;
use std::time::Duration;

// Lido wrapped stETH; stETH per wstETH
sol! {
    #[sol(rpc)]
    interface IWstETH {
        function stEthPerToken() external view returns (uint256);
    }
}

// Stader stake pools manager; ETHx exchange rate
sol! {
    #[sol(rpc)]
    interface IStaderStakePoolsManager {
        function getExchangeRate() external view returns (uint256);
    }
}

// Swell swETH; ETH per swETH
sol! {
    #[sol(rpc)]
    interface ISwETH {
        function swETHToETHRate() external view returns (uint256);
    }
}

/// Pause before every Etherscan request to stay under the free tier rate limit
const ETHERSCAN_DELAY: Duration = Duration::from_millis(200);

/// Liquid staking token contracts whose exchange rates are tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LstContract {
    /// Lido wstETH
    Lido,
    /// Stader ETHx
    Stader,
    /// Swell swETH
    Swell,
}

impl LstContract {
    /// Every tracked contract, in output order
    pub const ALL: [Self; 3] = [Self::Lido, Self::Stader, Self::Swell];

    /// Deployment address on `chain`
    #[must_use]
    pub fn address(self, chain: Chain) -> Address {
        match (self, chain) {
            (Self::Lido, Chain::Mainnet) => address!("0x7f39C581F595B53c5cb19bD0b3f8dA6c935E2Ca0"),
            (Self::Lido, Chain::Goerli) => address!("0x6320cD32aA674d2898A68ec82e869385Fc5f7E2f"),
            (Self::Stader, Chain::Mainnet) => address!("0xcf5EA1b38380f6aF39068375516Daf40Ed70D299"),
            (Self::Stader, Chain::Goerli) => address!("0x22F8E700ff3912f3Caba5e039F6dfF1a24390E80"),
            (Self::Swell, Chain::Mainnet) => address!("0xf951E335afb289353dc249e82926178EaC7DEd78"),
            (Self::Swell, Chain::Goerli) => address!("0x8bb383A752Ff3c1d510625C6F536E3332327068F"),
        }
    }

    /// Reads the contract's exchange rate as of `block_number`
    ///
    /// # Errors
    /// * If the call fails, e.g. the node is not an archive node
    pub async fn rate_at(
        self,
        provider: &RootProvider<Ethereum>,
        chain: Chain,
        block_number: u64,
    ) -> Result<U256> {
        let address = self.address(chain);
        let block = BlockId::number(block_number);

        let rate = match self {
            Self::Lido => {
                IWstETH::new(address, provider)
                    .stEthPerToken()
                    .block(block)
                    .call()
                    .await?
                    ._0
            }
            Self::Stader => {
                IStaderStakePoolsManager::new(address, provider)
                    .getExchangeRate()
                    .block(block)
                    .call()
                    .await?
                    ._0
            }
            Self::Swell => {
                ISwETH::new(address, provider)
                    .swETHToETHRate()
                    .block(block)
                    .call()
                    .await?
                    ._0
            }
        };
        Ok(rate)
    }
}

/// A block matched to a sampling time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData {
    /// Block number
    pub number: u64,
    /// Block timestamp
    pub timestamp: u64,
}

/// Rate history of one contract
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractRates {
    /// Checksummed contract address
    pub address: String,
    /// One rate per daily block, as decimal strings
    pub historical_exchange_rates: Vec<String>,
}

/// Rate histories of every tracked contract
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExchangeRateData {
    /// Lido wstETH
    pub lido: ContractRates,
    /// Stader ETHx
    pub stader: ContractRates,
    /// Swell swETH
    pub swell: ContractRates,
}

/// One daily sampling block
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyBlock {
    /// `yyyy-MM-dd HH:mm:ss` in UTC
    pub human_timestamp: String,
    /// Unix seconds, as a decimal string
    pub timestamp: String,
    /// Block number, as a decimal string
    pub block_number: String,
}

impl From<BlockData> for DailyBlock {
    fn from(block: BlockData) -> Self {
        Self {
            human_timestamp: human_timestamp(block.timestamp),
            timestamp: block.timestamp.to_string(),
            block_number: block.number.to_string(),
        }
    }
}

/// Blocks after a warped history, up to today
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NextDaysBlockData {
    /// Block numbers, as decimal strings
    pub block_numbers: Vec<String>,
    /// Block timestamps, as decimal strings
    pub timestamps: Vec<String>,
}

impl NextDaysBlockData {
    /// Collects the numbers and timestamps of `blocks`
    #[must_use]
    pub fn from_blocks(blocks: &[BlockData]) -> Self {
        Self {
            block_numbers: blocks.iter().map(|b| b.number.to_string()).collect(),
            timestamps: blocks.iter().map(|b| b.timestamp.to_string()).collect(),
        }
    }
}

/// The full scraper output
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalExchangeRates {
    /// Rates per contract
    pub exchange_rate_data: ExchangeRateData,
    /// The daily sampling blocks, oldest first
    pub daily_block_data: Vec<DailyBlock>,
    /// Only present for warped runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_days_block_data: Option<NextDaysBlockData>,
}

/// Collects a week of daily exchange rates for every tracked contract.
///
/// With `warp_days`, the week ends `warp_days` days ago and the blocks of the
/// days since are reported too, so a historic simulation can replay them.
///
/// # Errors
/// * If a block lookup or contract call fails
pub async fn exchange_rates(ctx: &AppContext, warp_days: Option<u32>) -> Result<HistoricalExchangeRates> {
    let now = Utc::now();
    let timestamps = daily_timestamps(now, warp_days.unwrap_or(0));
    info!(
        "sync::exchange_rates: Sampling {} days on {} ending {}",
        timestamps.len(),
        ctx.chain,
        timestamps.last().map_or(0, |t| *t)
    );

    let daily_blocks = blocks_for_timestamps(ctx, &timestamps).await?;

    let mut histories = Vec::with_capacity(LstContract::ALL.len());
    for contract in LstContract::ALL {
        let mut rates = Vec::with_capacity(daily_blocks.len());
        for block in &daily_blocks {
            let rate = contract.rate_at(&ctx.provider, ctx.chain, block.number).await?;
            debug!(
                "sync::exchange_rates: {contract:?} at block {}: {rate}",
                block.number
            );
            rates.push(rate.to_string());
        }
        histories.push(ContractRates {
            address: contract.address(ctx.chain).to_string(),
            historical_exchange_rates: rates,
        });
    }
    let [lido, stader, swell]: [ContractRates; 3] = histories
        .try_into()
        .map_err(|_| eyre!("expected one rate history per contract"))?;

    let next_days_block_data = match (warp_days, timestamps.last()) {
        (Some(_), Some(last)) => {
            let next = next_day_timestamps(*last, now);
            let blocks = blocks_for_timestamps(ctx, &next).await?;
            Some(NextDaysBlockData::from_blocks(&blocks))
        }
        _ => None,
    };

    Ok(HistoricalExchangeRates {
        exchange_rate_data: ExchangeRateData {
            lido,
            stader,
            swell,
        },
        daily_block_data: daily_blocks.into_iter().map(DailyBlock::from).collect(),
        next_days_block_data,
    })
}

/// Looks up the block for every timestamp, in order, with a progress bar
async fn blocks_for_timestamps(ctx: &AppContext, timestamps: &[i64]) -> Result<Vec<BlockData>> {
    let progress = ProgressBar::new(timestamps.len() as u64);
    progress.set_style(ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:30} {pos}/{len} blocks",
    )?);

    let mut blocks = Vec::with_capacity(timestamps.len());
    for timestamp in timestamps {
        blocks.push(block_for_timestamp(ctx, *timestamp).await?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(blocks)
}

/// The last block at or before `timestamp`, falling back to the newest block
/// when Etherscan cannot answer.
///
/// # Errors
/// * If the Etherscan request fails
/// * If the block cannot be read from the node
pub async fn block_for_timestamp(ctx: &AppContext, timestamp: i64) -> Result<BlockData> {
    tokio::time::sleep(ETHERSCAN_DELAY).await;

    let tag = match ctx.etherscan.block_number_before(timestamp).await? {
        Some(number) => BlockNumberOrTag::Number(number),
        None => {
            warn!("sync::exchange_rates: No block found before {timestamp}, using the newest block");
            BlockNumberOrTag::Latest
        }
    };

    let block = ctx
        .provider
        .get_block_by_number(tag, BlockTransactionsKind::Hashes)
        .await?
        .ok_or_else(|| eyre!("block {tag} not found"))?;

    Ok(BlockData {
        number: block.header.number,
        timestamp: block.header.timestamp,
    })
}
