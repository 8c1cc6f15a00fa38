// ========== METADATA LIMITS ==========
/// Maximum length for NFT title, in bytes
pub const MAX_TITLE_LENGTH: usize = 32;

/// Maximum length for NFT symbol, in bytes
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum length for NFT metadata URI, in bytes
pub const MAX_URI_LENGTH: usize = 200;

// ========== PDA SEEDS ==========
/// Seed for the program config PDA
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed for the NFT mint PDA
pub const MINT_SEED: &[u8] = b"mint";

/// Seed for the PDA that holds mint authority until the supply is frozen
pub const MINT_AUTHORITY_SEED: &[u8] = b"mint_authority";

/// Seed for metadata account
pub const METADATA_SEED: &[u8] = b"metadata";

/// Seed for master edition account
pub const MASTER_EDITION_SEED: &[u8] = b"edition";

// ========== TOKEN SHAPE ==========
/// NFTs are indivisible
pub const NFT_DECIMALS: u8 = 0;

/// Units ever minted for the NFT
pub const NFT_SUPPLY: u64 = 1;

// ========== METAPLEX INTEGRATION ==========
use anchor_lang::solana_program::{pubkey, pubkey::Pubkey};

/// Metaplex Token Metadata Program ID
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// Seller fee basis points (0 = no royalties)
pub const DEFAULT_SELLER_FEE_BASIS_POINTS: u16 = 0;

/// Metadata stays mutable by its update authority until the supply is frozen
pub const DEFAULT_IS_MUTABLE: bool = true;

/// Printable editions allowed from the master edition
pub const MASTER_EDITION_MAX_SUPPLY: u64 = 0;
