use crate::domain::entities::project::Project;
use crate::domain::ports::ProjectCatalog;
use crate::domain::values::category::Category::{Web3, Web3Gaming};

/// The curated project list, capped at 100 entries: 51 Web3 and 49 Web3 Gaming tokens.
pub static PROJECTS: [Project; 100] = [
    // DeFi Protocols
    Project::new("UNI", "Uniswap", Web3),
    Project::new("AAVE", "Aave", Web3),
    Project::new("COMP", "Compound", Web3),
    Project::new("MKR", "Maker", Web3),
    Project::new("SNX", "Synthetix", Web3),
    Project::new("CRV", "Curve DAO Token", Web3),
    Project::new("BAL", "Balancer", Web3),
    Project::new("YFI", "yearn.finance", Web3),
    Project::new("1INCH", "1inch Network", Web3),
    Project::new("SUSHI", "SushiSwap", Web3),
    // Layer 1 Blockchains
    Project::new("ETH", "Ethereum", Web3),
    Project::new("BNB", "BNB", Web3),
    Project::new("ADA", "Cardano", Web3),
    Project::new("SOL", "Solana", Web3),
    Project::new("DOT", "Polkadot", Web3),
    Project::new("AVAX", "Avalanche", Web3),
    Project::new("ATOM", "Cosmos", Web3),
    Project::new("ALGO", "Algorand", Web3),
    Project::new("FTM", "Fantom", Web3),
    Project::new("NEAR", "NEAR Protocol", Web3),
    // Layer 2 Solutions
    Project::new("MATIC", "Polygon", Web3),
    Project::new("LRC", "Loopring", Web3),
    Project::new("IMX", "Immutable X", Web3),
    Project::new("OP", "Optimism", Web3),
    Project::new("ARB", "Arbitrum", Web3),
    // Web3 Infrastructure
    Project::new("LINK", "Chainlink", Web3),
    Project::new("GRT", "The Graph", Web3),
    Project::new("FIL", "Filecoin", Web3),
    Project::new("AR", "Arweave", Web3),
    Project::new("STORJ", "Storj", Web3),
    // NFT & Metaverse
    Project::new("APE", "ApeCoin", Web3),
    Project::new("MANA", "Decentraland", Web3),
    Project::new("SAND", "The Sandbox", Web3),
    Project::new("ENJ", "Enjin Coin", Web3),
    Project::new("FLOW", "Flow", Web3),
    // DAOs and Governance
    Project::new("ANT", "Aragon", Web3),
    Project::new("BNT", "Bancor", Web3),
    Project::new("REN", "Ren", Web3),
    Project::new("LPT", "Livepeer", Web3),
    Project::new("MLN", "Enzyme", Web3),
    // Privacy & Security
    Project::new("ZEC", "Zcash", Web3),
    Project::new("XMR", "Monero", Web3),
    Project::new("SCRT", "Secret", Web3),
    Project::new("ROSE", "Oasis Network", Web3),
    Project::new("NYM", "Nym", Web3),
    // Cross-chain & Interoperability
    Project::new("ICP", "Internet Computer", Web3),
    Project::new("KSM", "Kusama", Web3),
    Project::new("RUNE", "THORChain", Web3),
    Project::new("CKB", "Nervos Network", Web3),
    Project::new("BAND", "Band Protocol", Web3),
    Project::new("LIT", "Litentry", Web3),
    // Gaming Tokens
    Project::new("AXS", "Axie Infinity", Web3Gaming),
    Project::new("SLP", "Smooth Love Potion", Web3Gaming),
    Project::new("GALA", "Gala", Web3Gaming),
    Project::new("ILV", "Illuvium", Web3Gaming),
    Project::new("ALICE", "My Neighbor Alice", Web3Gaming),
    Project::new("TLM", "Alien Worlds", Web3Gaming),
    Project::new("RADIO", "RadioShack", Web3Gaming),
    Project::new("WAXP", "WAX", Web3Gaming),
    Project::new("CHR", "Chromia", Web3Gaming),
    Project::new("PYR", "Vulcan Forged PYR", Web3Gaming),
    // Play-to-Earn Games
    Project::new("GHST", "Aavegotchi", Web3Gaming),
    Project::new("REVV", "REVV", Web3Gaming),
    Project::new("TOWER", "Crazy Defense Heroes", Web3Gaming),
    Project::new("SKILL", "CryptoBlades", Web3Gaming),
    Project::new("GODS", "Gods Unchained", Web3Gaming),
    Project::new("SPS", "Splinterlands", Web3Gaming),
    Project::new("DEC", "Dark Energy Crystals", Web3Gaming),
    Project::new("DPET", "My DeFi Pet", Web3Gaming),
    Project::new("NFTB", "NFTb", Web3Gaming),
    Project::new("ETERNAL", "CryptoMines Eternal", Web3Gaming),
    // Gaming Infrastructure
    Project::new("RONIN", "Ronin", Web3Gaming),
    Project::new("ULTRA", "Ultra", Web3Gaming),
    Project::new("EFI", "Efinity Token", Web3Gaming),
    Project::new("GMEE", "GAMEE", Web3Gaming),
    Project::new("DIVI", "Divi", Web3Gaming),
    // Metaverse Gaming
    Project::new("STAR", "StarLink", Web3Gaming),
    Project::new("UFO", "UFO Gaming", Web3Gaming),
    Project::new("HERO", "Metahero", Web3Gaming),
    Project::new("DOSE", "DOSE", Web3Gaming),
    Project::new("NAKA", "Nakamoto Games", Web3Gaming),
    // Virtual Real Estate
    Project::new("LAND", "Landshare", Web3Gaming),
    Project::new("REALM", "Realm", Web3Gaming),
    Project::new("WILD", "Wilder World", Web3Gaming),
    Project::new("BOSON", "Boson Protocol", Web3Gaming),
    Project::new("BEPRO", "BetProtocol", Web3Gaming),
    // Gaming DAOs
    Project::new("YGG", "Yield Guild Games", Web3Gaming),
    Project::new("MC", "Merit Circle", Web3Gaming),
    Project::new("GGG", "Good Games Guild", Web3Gaming),
    Project::new("GUILD", "BlockchainSpace", Web3Gaming),
    Project::new("LABS", "LABS Group", Web3Gaming),
    // Mobile Gaming
    Project::new("MOBOX", "MOBOX", Web3Gaming),
    Project::new("BIND", "Cometh", Web3Gaming),
    Project::new("SUPER", "SuperFarm", Web3Gaming),
    Project::new("MIST", "Mist", Web3Gaming),
    Project::new("DREAMS", "Dreams Quest", Web3Gaming),
    // Card Games
    Project::new("SOR", "SoRare", Web3Gaming),
    Project::new("CARDS", "Cards of BSC", Web3Gaming),
    Project::new("CWAR", "Cryowar", Web3Gaming),
    Project::new("KNIGHT", "Forest Knight", Web3Gaming),
];

/// Compiled-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct CuratedCatalog;

impl ProjectCatalog for CuratedCatalog {
    fn projects(&self) -> &[Project] {
        &PROJECTS
    }
}
