use super::*;

#[cfg(not(feature = "devnet"))]
pub mod mainnet_deployer {
    use anchor_lang::{prelude::Pubkey, solana_program::pubkey};

    pub const DEPLOYERS: [Pubkey; 2] = [
        pubkey!("7yWnWU7VEDk3yzFesqTYbw9nJEGMuThAymeFXrvQ6wQx"),
        pubkey!("2qmugWTaSJNY4rs6ohTWVYech52h64LfJrxLqHVV9vDL"),
    ];
}

#[cfg(feature = "devnet")]
pub mod devnet_deployer {
    use anchor_lang::{prelude::Pubkey, solana_program::pubkey};

    pub const DEPLOYERS: [Pubkey; 3] = [
        pubkey!("7yWnWU7VEDk3yzFesqTYbw9nJEGMuThAymeFXrvQ6wQx"),
        pubkey!("2qmugWTaSJNY4rs6ohTWVYech52h64LfJrxLqHVV9vDL"),
        pubkey!("4e9DUuXYbkm5ty1RBYck8jEoYUq1WcfB8JTtF4m8DLLS"), // ci
    ];
}

/// Whether `signer` may run `initialize`. Every signer is accepted in local builds.
#[cfg(feature = "local")]
pub fn is_deployer(_signer: &Pubkey) -> bool {
    true
}

#[cfg(not(feature = "local"))]
pub fn is_deployer(signer: &Pubkey) -> bool {
    #[cfg(feature = "devnet")]
    let deployers = &devnet_deployer::DEPLOYERS;

    #[cfg(not(feature = "devnet"))]
    let deployers = &mainnet_deployer::DEPLOYERS;

    deployers.iter().any(|deployer| deployer == signer)
}
