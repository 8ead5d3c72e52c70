use odra::casper_types::U256;
use odra::host::{Deployer, HostEnv, HostRef, NoArgs};
use odra::prelude::{Address, Addressable};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt, OdraCli,
};
use pairswap_contracts::dex::exchange::{Exchange, ExchangeInitArgs};
use pairswap_contracts::dex::pair::{PairFactory, PairHostRef};
use pairswap_contracts::dex::registry::{PairRegistry, PairRegistryInitArgs};
use pairswap_contracts::errors::DexError;
use pairswap_contracts::token::{Asset, AssetHostRef, AssetInitArgs};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Supply minted to the deployer for each demo asset
const DEMO_SUPPLY: u64 = 1_000;
const DECIMALS: u32 = 18;

fn with_decimals(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u64).pow(U256::from(DECIMALS))
}

/// Deploys two demo assets, the pair factory, the registry and the exchange
pub struct DeployDexScript;

impl DeployScript for DeployDexScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer,
    ) -> Result<(), odra_cli::deploy::Error> {
        info!("Deploying assets");
        // Two instances of the same module, so these are not tracked by name
        for (name, symbol) in [("Token A", "TKA"), ("Token B", "TKB")] {
            env.set_gas(300_000_000_000);
            let asset = Asset::deploy(
                env,
                AssetInitArgs {
                    name: String::from(name),
                    symbol: String::from(symbol),
                    initial_supply: with_decimals(DEMO_SUPPLY),
                },
            );
            info!(symbol, address = ?asset.address(), "asset deployed");
        }

        info!("Deploying PairFactory");
        let pair_factory = PairFactory::load_or_deploy(
            env,
            NoArgs,
            container,
            750_000_000_000, // Carries the Pair wasm
        )?;
        info!(address = ?pair_factory.address(), "PairFactory deployed");

        info!("Deploying PairRegistry");
        let registry = PairRegistry::load_or_deploy(
            env,
            PairRegistryInitArgs {
                pair_factory: pair_factory.address(),
            },
            container,
            400_000_000_000,
        )?;
        info!(address = ?registry.address(), "PairRegistry deployed");

        info!("Deploying Exchange");
        let exchange = Exchange::load_or_deploy(
            env,
            ExchangeInitArgs {
                registry: registry.address(),
            },
            container,
            400_000_000_000,
        )?;
        info!(address = ?exchange.address(), "Exchange deployed");

        Ok(())
    }
}

fn asset_args() -> Vec<CommandArg> {
    vec![
        CommandArg::new("asset_a", "Address of the first asset", NamedCLType::Key),
        CommandArg::new("asset_b", "Address of the second asset", NamedCLType::Key),
    ]
}

/// Creates a pair through the exchange
pub struct CreatePairScenario;

impl Scenario for CreatePairScenario {
    fn args(&self) -> Vec<CommandArg> {
        asset_args()
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let asset_a = args.get_single::<Address>("asset_a")?;
        let asset_b = args.get_single::<Address>("asset_b")?;

        if let Some(pair) = exchange.get_pair(asset_a, asset_b) {
            warn!(?pair, "{}", DexError::PairExists.reason());
            return Ok(());
        }

        env.set_gas(900_000_000_000); // Deploys a Pair contract
        let pair = exchange.try_create_and_register_pair(asset_a, asset_b)?;
        info!(?pair, "pair created");
        Ok(())
    }
}

impl ScenarioMetadata for CreatePairScenario {
    const NAME: &'static str = "create-pair";
    const DESCRIPTION: &'static str = "Creates a pair for two assets through the exchange";
}

/// Approves the pair and deposits both assets through the exchange
pub struct AddLiquidityScenario;

impl Scenario for AddLiquidityScenario {
    fn args(&self) -> Vec<CommandArg> {
        let mut args = asset_args();
        args.push(CommandArg::new("amount_a", "Amount of the first asset", NamedCLType::U256));
        args.push(CommandArg::new("amount_b", "Amount of the second asset", NamedCLType::U256));
        args
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let asset_a = args.get_single::<Address>("asset_a")?;
        let asset_b = args.get_single::<Address>("asset_b")?;
        let amount_a = args.get_single::<U256>("amount_a")?;
        let amount_b = args.get_single::<U256>("amount_b")?;

        let Some(pair) = exchange.get_pair(asset_a, asset_b) else {
            warn!("{}", DexError::PairNotFound.reason());
            return Ok(());
        };

        env.set_gas(50_000_000_000);
        AssetHostRef::new(asset_a, env.clone()).try_approve(pair, amount_a)?;
        env.set_gas(50_000_000_000);
        AssetHostRef::new(asset_b, env.clone()).try_approve(pair, amount_b)?;

        env.set_gas(100_000_000_000);
        exchange.try_add_liquidity(asset_a, asset_b, amount_a, amount_b)?;

        let (reserve_a, reserve_b) = PairHostRef::new(pair, env.clone()).get_reserves();
        info!(%reserve_a, %reserve_b, "liquidity added");
        Ok(())
    }
}

impl ScenarioMetadata for AddLiquidityScenario {
    const NAME: &'static str = "add-liquidity";
    const DESCRIPTION: &'static str = "Approves the pair and adds liquidity through the exchange";
}

/// Sells `amount_in` of the first asset for the second
pub struct SwapScenario;

impl Scenario for SwapScenario {
    fn args(&self) -> Vec<CommandArg> {
        let mut args = asset_args();
        args.push(CommandArg::new("amount_in", "Amount of the first asset to sell", NamedCLType::U256));
        args
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let mut exchange = container.contract_ref::<Exchange>(env)?;
        let asset_in = args.get_single::<Address>("asset_a")?;
        let asset_out = args.get_single::<Address>("asset_b")?;
        let amount_in = args.get_single::<U256>("amount_in")?;

        let Some(pair) = exchange.get_pair(asset_in, asset_out) else {
            warn!("{}", DexError::PairNotFound.reason());
            return Ok(());
        };

        let quoted = exchange.try_get_swap_amount(asset_in, asset_out, amount_in)?;
        info!(%amount_in, %quoted, "quote");

        env.set_gas(50_000_000_000);
        AssetHostRef::new(asset_in, env.clone()).try_approve(pair, amount_in)?;

        env.set_gas(100_000_000_000);
        let amount_out = exchange.try_swap(asset_in, asset_out, amount_in)?;
        info!(%amount_in, %amount_out, "swap executed");
        Ok(())
    }
}

impl ScenarioMetadata for SwapScenario {
    const NAME: &'static str = "swap";
    const DESCRIPTION: &'static str = "Approves the pair and swaps through the exchange";
}

/// Read-only quote for a swap
pub struct QuoteScenario;

impl Scenario for QuoteScenario {
    fn args(&self) -> Vec<CommandArg> {
        let mut args = asset_args();
        args.push(CommandArg::new("amount_in", "Amount of the first asset to sell", NamedCLType::U256));
        args
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args,
    ) -> Result<(), Error> {
        let exchange = container.contract_ref::<Exchange>(env)?;
        let asset_in = args.get_single::<Address>("asset_a")?;
        let asset_out = args.get_single::<Address>("asset_b")?;
        let amount_in = args.get_single::<U256>("amount_in")?;

        let amount_out = exchange.try_get_swap_amount(asset_in, asset_out, amount_in)?;
        info!(%amount_in, %amount_out, "quote");
        Ok(())
    }
}

impl ScenarioMetadata for QuoteScenario {
    const NAME: &'static str = "quote";
    const DESCRIPTION: &'static str = "Prints the output of a swap without executing it";
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    OdraCli::new()
        .about("CLI tool for the pairswap contracts")
        // Deploy scripts
        .deploy(DeployDexScript)
        // Contract references
        .contract::<PairFactory>()
        .contract::<PairRegistry>()
        .contract::<Exchange>()
        // Scenarios
        .scenario(CreatePairScenario)
        .scenario(AddLiquidityScenario)
        .scenario(SwapScenario)
        .scenario(QuoteScenario)
        .build()
        .run();
}
