use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_pack::Pack;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_spl::associated_token::{self, Create};
use anchor_spl::token::{self, spl_token, InitializeMint2, Mint, MintTo};

use crate::error::MintNftError;
use crate::util::constants::{NFT_DECIMALS, NFT_SUPPLY};

/// Creates the mint account at its PDA and initializes it for a single
/// indivisible unit. `mint_signer_seeds` are the mint PDA's own seeds.
///
/// The caller must have checked the address is vacant; an existing mint is
/// rejected there with `AlreadyInitialized`.
pub fn initialize_nft_mint<'info>(
    mint: &AccountInfo<'info>,
    mint_authority: &Pubkey,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    mint_signer_seeds: &[&[u8]],
) -> Result<()> {
    let space = spl_token::state::Mint::LEN;
    let required_lamports = Rent::get()?.minimum_balance(space);
    let signer = &[mint_signer_seeds];

    if mint.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: mint.clone(),
                },
                signer,
            ),
            required_lamports,
            space as u64,
            &token::ID,
        )?;
    } else {
        // Someone already sent lamports to the address, so create_account
        // would fail. Top up, then allocate and assign in place.
        let top_up = required_lamports.saturating_sub(mint.lamports());
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    system_program.clone(),
                    Transfer {
                        from: payer.clone(),
                        to: mint.clone(),
                    },
                ),
                top_up,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system_program.clone(),
                Allocate {
                    account_to_allocate: mint.clone(),
                },
                signer,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system_program.clone(),
                Assign {
                    account_to_assign: mint.clone(),
                },
                signer,
            ),
            &token::ID,
        )?;
    }

    token::initialize_mint2(
        CpiContext::new(
            token_program.clone(),
            InitializeMint2 { mint: mint.clone() },
        ),
        NFT_DECIMALS,
        mint_authority,
        Some(mint_authority),
    )?;

    Ok(())
}

/// Creates `owner`'s associated token account for `mint`.
pub fn create_holding_account<'info>(
    holding_account: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    associated_token_program: &AccountInfo<'info>,
) -> Result<()> {
    associated_token::create(CpiContext::new(
        associated_token_program.clone(),
        Create {
            payer: payer.clone(),
            associated_token: holding_account.clone(),
            authority: owner.clone(),
            mint: mint.clone(),
            system_program: system_program.clone(),
            token_program: token_program.clone(),
        },
    ))
}

/// Mints the NFT's single unit into `holding_account`, signed by the
/// program's mint authority.
pub fn mint_single_unit<'info>(
    mint: &AccountInfo<'info>,
    holding_account: &AccountInfo<'info>,
    mint_authority: &AccountInfo<'info>,
    token_program: &AccountInfo<'info>,
    authority_signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token::mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: holding_account.clone(),
                authority: mint_authority.clone(),
            },
            authority_signer_seeds,
        ),
        NFT_SUPPLY,
    )
}

fn read_mint(mint: &AccountInfo) -> Result<Mint> {
    let data = mint.try_borrow_data()?;
    Mint::try_deserialize(&mut &data[..])
}

/// Fails with `InvalidTokenSupply` unless the mint holds exactly one
/// indivisible unit.
pub fn verify_single_supply(mint: &AccountInfo) -> Result<()> {
    let state = read_mint(mint)?;
    if state.supply != NFT_SUPPLY || state.decimals != NFT_DECIMALS {
        msg!(
            "Mint {} has supply {} with {} decimals",
            mint.key,
            state.supply,
            state.decimals
        );
        return err!(MintNftError::InvalidTokenSupply);
    }
    Ok(())
}

/// Current mint authority, `None` once revoked.
pub fn current_mint_authority(mint: &AccountInfo) -> Result<Option<Pubkey>> {
    Ok(read_mint(mint)?.mint_authority.into())
}
