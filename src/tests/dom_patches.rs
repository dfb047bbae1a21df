use wasm_bindgen_test::*;

use super::{document, fixture};
use crate::components::cart::snapshot_cart_lines;
use crate::components::checkout::payment_form_present;
use crate::dom_utils;
use crate::messages::DomPatch;
use crate::money::CartTotals;
use crate::ui_updates::apply;

const CART: &str = r#"
<span id="cart-count">2</span>
<div class="productos">
  <div class="producto" data-subtotal="17000"><button class="btn_eliminar" data-pid="1">x</button></div>
  <div class="producto" data-subtotal="450"><button class="btn_eliminar" data-pid="2">x</button></div>
</div>
<span id="subtotal">$17450.00</span><span id="total">$17450.00</span>
"#;

#[wasm_bindgen_test]
fn cart_snapshot_and_removal_patches() {
    let root = fixture(CART);
    let doc = document();
    assert_eq!(snapshot_cart_lines(&doc), vec![("1".to_string(), 17000.0), ("2".to_string(), 450.0)]);

    apply(&doc, &DomPatch::RemoveCartLine { pid: "2".into() }).unwrap();
    apply(&doc, &DomPatch::CartTotals(CartTotals { subtotal: 17000.0, total: 17000.0 })).unwrap();
    apply(&doc, &DomPatch::CartCount(1)).unwrap();

    assert_eq!(doc.get_element_by_id("cart-count").unwrap().text_content().unwrap(), "1");
    assert_eq!(doc.get_element_by_id("subtotal").unwrap().text_content().unwrap(), "$17000.00");
    assert_eq!(root.query_selector_all(".producto").unwrap().length(), 1);
    root.remove();
}

#[wasm_bindgen_test]
fn empty_cart_leaves_single_paragraph() {
    let root = fixture(CART);
    let doc = document();
    apply(&doc, &DomPatch::EmptyCart).unwrap();
    apply(&doc, &DomPatch::EmptyCart).unwrap();

    let container = root.query_selector(".productos").unwrap().unwrap();
    assert_eq!(container.children().length(), 1);
    assert_eq!(container.text_content().unwrap(), "No hay productos en el carrito.");
    root.remove();
}

#[wasm_bindgen_test]
fn flash_and_favorite_classes() {
    let root = fixture(
        r#"<button class="btn_carrito" data-pid="42"></button><button class="btn_fav" data-pid="42"></button>"#,
    );
    let doc = document();
    apply(&doc, &DomPatch::FlashAdded { pid: "42".into(), duration_ms: 800 }).unwrap();
    let cart_button = root.query_selector(".btn_carrito").unwrap().unwrap();
    assert!(cart_button.class_list().contains("added"));

    let fav = root.query_selector(".btn_fav").unwrap().unwrap();
    apply(&doc, &DomPatch::FavoriteActive { pid: "42".into(), active: true }).unwrap();
    assert!(fav.class_list().contains("fav-active"));
    apply(&doc, &DomPatch::FavoriteActive { pid: "42".into(), active: false }).unwrap();
    assert!(!fav.class_list().contains("fav-active"));
    root.remove();
}

#[wasm_bindgen_test]
async fn added_class_clears_after_flash() {
    let root = fixture(r#"<button class="btn_carrito" data-pid="43"></button>"#);
    apply(&document(), &DomPatch::FlashAdded { pid: "43".into(), duration_ms: 20 }).unwrap();
    gloo_timers::future::TimeoutFuture::new(60).await;
    let button = root.query_selector(".btn_carrito").unwrap().unwrap();
    assert!(!button.class_list().contains("added"));
    root.remove();
}

#[wasm_bindgen_test]
fn checkout_button_busy_state() {
    let root = fixture(r#"<button id="checkoutBtn">Pagar</button>"#);
    let doc = document();
    assert!(!payment_form_present(&doc));

    apply(&doc, &DomPatch::CheckoutBusy(true)).unwrap();
    let button = doc.get_element_by_id("checkoutBtn").unwrap();
    assert!(button.has_attribute("disabled"));
    assert!(button.class_list().contains("loading"));
    apply(&doc, &DomPatch::CheckoutBusy(false)).unwrap();
    assert!(!button.has_attribute("disabled"));

    let payment = fixture(r#"<div class="payment-container"></div>"#);
    assert!(payment_form_present(&doc));
    payment.remove();
    root.remove();
}

#[wasm_bindgen_test]
fn fallback_form_carries_only_the_token() {
    let doc = document();
    let form = dom_utils::build_hidden_form(&doc, "/checkout", &[("csrf_token", "tok-123")]).unwrap();
    assert_eq!(form.method(), "post");
    assert!(form.action().ends_with("/checkout"));
    let inputs = form.query_selector_all("input").unwrap();
    assert_eq!(inputs.length(), 1);
    let input = form.query_selector("input[name=\"csrf_token\"]").unwrap().unwrap();
    assert_eq!(input.get_attribute("type").as_deref(), Some("hidden"));
    form.remove();
}

#[wasm_bindgen_test]
fn delete_modal_visibility() {
    let root = fixture(r#"<div id="deleteModal" style="display:none"></div>"#);
    let doc = document();
    apply(&doc, &DomPatch::DeleteModalVisible(true)).unwrap();
    let modal = doc.get_element_by_id("deleteModal").unwrap();
    assert!(modal.get_attribute("style").unwrap().contains("block"));
    apply(&doc, &DomPatch::DeleteModalVisible(false)).unwrap();
    assert!(modal.get_attribute("style").unwrap().contains("none"));
    root.remove();
}
