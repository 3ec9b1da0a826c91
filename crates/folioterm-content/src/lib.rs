//! Static portfolio content served by the FolioTerm shell.
//!
//! Everything a command prints lives here as plain data: the banner and
//! welcome header, the fixed text block behind each command, the project
//! catalogue, and the certification table the `education` command turns into
//! clickable entries. No formatting or terminal logic -- the core crate
//! assembles these into lines.

pub mod blocks;
pub mod education;
pub mod projects;

/// ASCII-art banner, the first line of the permanent header.
pub const BANNER: &str = "
####   ###   #### ####  ##### #   #  ###  #   #
#   # #   # #     #   #   #    # #  #   # ##  #
####  ##### #  ## ####    #     #   ##### # # #
#   # #   # #   # #  #    #     #   #   # #  ##
####  #   #  #### #   # #####   #   #   # #   #

        B O R I S O V  -  Software Developer
";

/// Welcome message, the second line of the permanent header.
pub const WELCOME: &str =
    "Welcome to Bagriyan Borisov's Portfolio! Type \"help\" to see available commands.";
