//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bargain")]
#[command(about = "Bargain - a storefront with negotiable prices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the storefront catalog
    Browse,

    /// Make an offer on a product
    Negotiate {
        /// Product ID to haggle over (see `browse`)
        product_id: String,

        /// Your offer, e.g. 92.50
        #[arg(short, long)]
        offer: String,

        /// Take the seller's counter-offer if one comes back
        #[arg(long)]
        accept_counter: bool,
    },

    /// Log in with a mobile number and one-time code
    Login {
        /// 10-digit mobile number
        #[arg(short, long)]
        mobile: String,

        /// 4-digit OTP (any well-formed code is accepted)
        #[arg(short, long)]
        otp: String,
    },

    /// Run the scripted storefront walkthrough
    Demo,
}
