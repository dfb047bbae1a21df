//! Product collection view: fetch once at mount, create inline, delete after
//! the server confirms.

use crate::constants::{
    MSG_PRODUCTS_LOAD_FAILED, MSG_PRODUCT_CREATE_FAILED, MSG_PRODUCT_DELETE_FAILED,
    MSG_TITLE_REQUIRED,
};
use crate::error_log;
use crate::messages::{Command, DomPatch, Message};
use crate::state::AppState;
use crate::validation::parse_product_form;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::ProductListMounted => {
            if !state.product_list_mounted {
                state.product_list_mounted = true;
                commands.push(Command::FetchProducts);
            }
            true
        }
        Message::ProductsLoaded(result) => {
            match result {
                Ok(products) => {
                    state.products = products.clone();
                    commands.push(render_list(state));
                }
                Err(e) => {
                    error_log!("loading products failed: {}", e);
                    commands.push(Command::Toast(MSG_PRODUCTS_LOAD_FAILED.to_string()));
                }
            }
            true
        }
        Message::ProductFormSubmitted { title, price, img } => {
            match parse_product_form(title, price, img) {
                Ok(product) => commands.push(Command::CreateProduct(product)),
                Err(_) => commands.push(Command::Alert(MSG_TITLE_REQUIRED.to_string())),
            }
            true
        }
        Message::ProductCreated(result) => {
            match result {
                Ok(product) => {
                    state.products.push(product.clone());
                    commands.push(render_list(state));
                    commands.push(Command::Render(DomPatch::ClearProductForm));
                }
                Err(e) => {
                    error_log!("creating product failed: {}", e);
                    commands.push(Command::Alert(MSG_PRODUCT_CREATE_FAILED.to_string()));
                }
            }
            true
        }
        Message::ProductDeleteConfirmed(id) => {
            commands.push(Command::DeleteProduct(*id));
            true
        }
        Message::ProductDeleted { id, result } => {
            match result {
                Ok(()) => {
                    state.products.retain(|p| p.id != *id);
                    commands.push(render_list(state));
                }
                Err(e) => {
                    error_log!("deleting product {} failed: {}", id, e);
                    commands.push(Command::Alert(MSG_PRODUCT_DELETE_FAILED.to_string()));
                }
            }
            true
        }
        _ => false,
    }
}

fn render_list(state: &AppState) -> Command {
    Command::Render(DomPatch::ProductList(state.products.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PLACEHOLDER_IMAGE;
    use crate::models::{NewProduct, Product};
    use crate::network::FetchError;

    fn product(id: u64, title: &str) -> Product {
        Product { id, title: title.into(), price: Some(450.0), img: None, image_url: None }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut commands = Vec::new();
        assert!(update(state, &msg, &mut commands));
        commands
    }

    #[test]
    fn mount_fetches_once() {
        let mut state = AppState::new();
        assert_eq!(run(&mut state, Message::ProductListMounted), vec![Command::FetchProducts]);
        assert!(run(&mut state, Message::ProductListMounted).is_empty());
    }

    #[test]
    fn loaded_products_render() {
        let mut state = AppState::new();
        let list = vec![product(1, "ZOMBIES GAME"), product(2, "CONTROL")];
        let commands = run(&mut state, Message::ProductsLoaded(Ok(list.clone())));
        assert_eq!(commands, vec![Command::Render(DomPatch::ProductList(list))]);
    }

    #[test]
    fn load_failure_toasts() {
        let mut state = AppState::new();
        let commands = run(&mut state, Message::ProductsLoaded(Err(FetchError::Status(500))));
        assert_eq!(commands, vec![Command::Toast("No se pudieron cargar los productos".into())]);
    }

    #[test]
    fn form_without_title_alerts_and_skips_request() {
        let mut state = AppState::new();
        let commands = run(
            &mut state,
            Message::ProductFormSubmitted { title: "  ".into(), price: "10".into(), img: "".into() },
        );
        assert_eq!(commands, vec![Command::Alert("Título requerido".into())]);
    }

    #[test]
    fn form_submission_creates_with_defaults() {
        let mut state = AppState::new();
        let commands = run(
            &mut state,
            Message::ProductFormSubmitted { title: " Mouse ".into(), price: "abc".into(), img: "".into() },
        );
        assert_eq!(
            commands,
            vec![Command::CreateProduct(NewProduct {
                title: "Mouse".into(),
                price: 0.0,
                img: PLACEHOLDER_IMAGE.into(),
            })]
        );
    }

    #[test]
    fn created_product_appends_and_clears_form() {
        let mut state = AppState::new();
        state.products = vec![product(1, "A")];
        let commands = run(&mut state, Message::ProductCreated(Ok(product(2, "B"))));
        assert_eq!(state.products.len(), 2);
        assert_eq!(commands.last(), Some(&Command::Render(DomPatch::ClearProductForm)));

        let commands = run(&mut state, Message::ProductCreated(Err(FetchError::Status(422))));
        assert_eq!(commands, vec![Command::Alert("Error al crear el producto".into())]);
        assert_eq!(state.products.len(), 2);
    }

    #[test]
    fn delete_waits_for_server() {
        let mut state = AppState::new();
        state.products = vec![product(1, "A"), product(2, "B")];

        assert_eq!(run(&mut state, Message::ProductDeleteConfirmed(2)), vec![Command::DeleteProduct(2)]);
        assert_eq!(state.products.len(), 2);

        let failed = run(&mut state, Message::ProductDeleted { id: 2, result: Err(FetchError::Status(500)) });
        assert_eq!(failed, vec![Command::Alert("No se pudo eliminar el producto.".into())]);
        assert_eq!(state.products.len(), 2);

        let commands = run(&mut state, Message::ProductDeleted { id: 2, result: Ok(()) });
        assert_eq!(commands, vec![Command::Render(DomPatch::ProductList(vec![product(1, "A")]))]);
    }
}
