//! Applies [`DomPatch`] values to the live document.
//!
//! Every patch looks its elements up at apply time and silently skips the
//! ones that are missing, so the same bundle runs on every page.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    ATTR_PID, ATTR_PRODUCT_ID, CSS_ADDED, CSS_FAV_ACTIVE, CSS_LOADING, CSS_PRODUCT_VIEW,
    EMPTY_CART_HTML, ID_CART_COUNT, ID_CHECKOUT_BUTTON, ID_DELETE_MODAL, ID_FORM_ADD,
    ID_FORM_IMG, ID_FORM_PRICE, ID_FORM_TITLE, ID_PRODUCT_LIST, ID_SUBTOTAL, ID_TOTAL,
    SEL_ADD_TO_CART, SEL_CART_LINE, SEL_CART_LINES_CONTAINER, SEL_FAVORITE,
    SEL_REMOVE_FROM_CART,
};
use crate::dom_utils::{self, attr_selector, query_all};
use crate::messages::DomPatch;
use crate::models::Product;

pub fn apply(document: &Document, patch: &DomPatch) -> Result<(), JsValue> {
    match patch {
        DomPatch::CartCount(count) => set_text(document, ID_CART_COUNT, &count.to_string()),
        DomPatch::CartTotals(totals) => {
            set_text(document, ID_SUBTOTAL, &totals.subtotal_text());
            set_text(document, ID_TOTAL, &totals.total_text());
        }
        DomPatch::RemoveCartLine { pid } => {
            for button in query_all(document, &attr_selector(SEL_REMOVE_FROM_CART, ATTR_PID, pid)) {
                if let Some(line) = button.closest(SEL_CART_LINE)? {
                    line.remove();
                }
            }
        }
        DomPatch::EmptyCart => {
            if let Some(container) = document.query_selector(SEL_CART_LINES_CONTAINER)? {
                container.set_inner_html(EMPTY_CART_HTML);
            }
        }
        DomPatch::FlashAdded { pid, duration_ms } => {
            let buttons = query_all(document, &attr_selector(SEL_ADD_TO_CART, ATTR_PID, pid));
            for button in &buttons {
                button.class_list().add_1(CSS_ADDED)?;
            }
            Timeout::new(*duration_ms, move || {
                for button in buttons {
                    let _ = button.class_list().remove_1(CSS_ADDED);
                }
            })
            .forget();
        }
        DomPatch::FavoriteActive { pid, active } => {
            for button in query_all(document, &attr_selector(SEL_FAVORITE, ATTR_PID, pid)) {
                button.class_list().toggle_with_force(CSS_FAV_ACTIVE, *active)?;
            }
        }
        DomPatch::CheckoutBusy(busy) => {
            if let Some(button) = document.get_element_by_id(ID_CHECKOUT_BUTTON) {
                if *busy {
                    button.set_attribute("disabled", "")?;
                    button.class_list().add_1(CSS_LOADING)?;
                } else {
                    button.remove_attribute("disabled")?;
                    button.class_list().remove_1(CSS_LOADING)?;
                }
            }
        }
        DomPatch::DeleteModalVisible(visible) => {
            if let Some(modal) = document.get_element_by_id(ID_DELETE_MODAL) {
                if *visible {
                    dom_utils::show(&modal);
                } else {
                    dom_utils::hide(&modal);
                }
            }
        }
        DomPatch::ProductList(products) => {
            if let Some(container) = document.get_element_by_id(ID_PRODUCT_LIST) {
                render_product_list(document, &container, products)?;
            }
        }
        DomPatch::ClearProductForm => {
            for id in [ID_FORM_TITLE, ID_FORM_PRICE, ID_FORM_IMG] {
                dom_utils::set_input_value(document, id, "");
            }
        }
    }
    Ok(())
}

fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Empty `container`, then lay out the create form followed by one view per
/// product.  Product fields only ever reach the DOM as text or attributes.
pub fn render_product_list(document: &Document, container: &Element, products: &[Product]) -> Result<(), JsValue> {
    container.set_text_content(None);
    let form = product_form(document)?;
    container.append_child(&form)?;
    for product in products {
        let view = product_view(document, product)?;
        container.append_child(&view)?;
    }
    Ok(())
}

fn product_form(document: &Document) -> Result<Element, JsValue> {
    let form = document.create_element("div")?;
    form.set_class_name("backbone-form");
    for (id, placeholder) in [
        (ID_FORM_TITLE, "Título"),
        (ID_FORM_PRICE, "Precio"),
        (ID_FORM_IMG, "URL imagen (/static/...)"),
    ] {
        let input = document.create_element("input")?;
        input.set_id(id);
        input.set_attribute("placeholder", placeholder)?;
        form.append_child(&input)?;
    }
    let add = document.create_element("button")?;
    add.set_id(ID_FORM_ADD);
    add.set_attribute("type", "button")?;
    add.set_text_content(Some("Agregar producto"));
    form.append_child(&add)?;
    Ok(form)
}

fn product_view(document: &Document, product: &Product) -> Result<Element, JsValue> {
    let view = document.create_element("div")?;
    view.set_class_name(CSS_PRODUCT_VIEW);
    view.set_attribute(ATTR_PRODUCT_ID, &product.id.to_string())?;

    let images = document.create_element("div")?;
    images.set_class_name("imagenes_producto");
    let img = document.create_element("img")?;
    img.set_class_name("imagen_producto");
    img.set_attribute("src", product.display_image())?;
    img.set_attribute("alt", &product.title)?;
    images.append_child(&img)?;
    view.append_child(&images)?;

    let title = document.create_element("h3")?;
    title.set_class_name("product-title");
    title.set_text_content(Some(&product.title));
    view.append_child(&title)?;

    let price = document.create_element("p")?;
    price.set_class_name("product-price");
    price.set_text_content(Some(&format!("${}", product.display_price())));
    view.append_child(&price)?;

    let controls = document.create_element("div")?;
    controls.set_class_name("backbone-controls");
    let delete = document.create_element("button")?;
    delete.set_class_name("delete-btn");
    delete.set_attribute("type", "button")?;
    delete.set_text_content(Some("Eliminar"));
    controls.append_child(&delete)?;
    view.append_child(&controls)?;

    Ok(view)
}
