//! # Menu Commands
//!
//! One handler per menu option. Each writes its part of the transcript and
//! returns a `CliResult`; the menu loop owns error reporting and the
//! "Operação finalizada." trailer.
//!
//! | Option                    | Handler                     |
//! |---------------------------|-----------------------------|
//! | 1 - Exibir produtos       | [`catalog::show_products`]  |
//! | 2 - Adicionar ao carrinho | [`cart::add_to_cart`]       |
//! | 3 - Ver carrinho e total  | [`cart::show_cart`]         |
//! | 4 - Pagamento             | [`checkout::pay`]           |

pub mod cart;
pub mod catalog;
pub mod checkout;
