// src/messages.rs
//
// Every event the storefront reacts to, and every side effect the reducers
// can ask for.
//
use crate::models::{
    CartUpdate, CheckoutOutcome, FavoriteUpdate, NewProduct, Outcome, Pid, Product, ProductId,
};
use crate::money::CartTotals;
use crate::network::FetchError;
use crate::state::PageSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Page state captured once the DOM is ready.
    Boot(Box<PageSnapshot>),

    // Cart
    AddToCartClicked { pid: Pid },
    AddToCartFinished {
        pid: Pid,
        result: Result<Outcome<CartUpdate>, FetchError>,
    },
    RemoveFromCartClicked { pid: Pid },
    RemoveFromCartFinished {
        pid: Pid,
        result: Result<Outcome<CartUpdate>, FetchError>,
    },

    // Favorites
    FavoriteClicked { pid: Pid },
    FavoriteFinished {
        pid: Pid,
        result: Result<Outcome<FavoriteUpdate>, FetchError>,
    },

    // Search
    SearchSubmitted { query: String },

    // Checkout
    CheckoutClicked { payment_form_present: bool },
    CheckoutFinished(Result<CheckoutOutcome, FetchError>),

    // Admin delete modal
    DeleteTriggerClicked { pid: Option<Pid> },
    DeleteModalDismissed,
    DeleteConfirmed,

    // Product list view
    ProductListMounted,
    ProductsLoaded(Result<Vec<Product>, FetchError>),
    ProductFormSubmitted {
        title: String,
        price: String,
        img: String,
    },
    ProductCreated(Result<Product, FetchError>),
    ProductDeleteConfirmed(ProductId),
    ProductDeleted {
        id: ProductId,
        result: Result<(), FetchError>,
    },
}

/// Targeted DOM mutations.  Each one is a no-op when its elements are absent.
#[derive(Debug, Clone, PartialEq)]
pub enum DomPatch {
    CartCount(u32),
    CartTotals(CartTotals),
    /// Drop the `.producto` node holding this pid's remove button.
    RemoveCartLine { pid: Pid },
    /// Replace `.productos` with the empty-cart paragraph.
    EmptyCart,
    /// Add `added` to the pid's cart buttons, remove it after `duration_ms`.
    FlashAdded { pid: Pid, duration_ms: u32 },
    FavoriteActive { pid: Pid, active: bool },
    CheckoutBusy(bool),
    DeleteModalVisible(bool),
    ProductList(Vec<Product>),
    ClearProductForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Network --------------------------------------------------------------
    PostAddToCart { pid: Pid },
    PostRemoveFromCart { pid: Pid },
    PostFavoriteToggle { pid: Pid },
    PostCheckout,
    FetchProducts,
    CreateProduct(NewProduct),
    DeleteProduct(ProductId),

    // UI / browser ---------------------------------------------------------
    Render(DomPatch),
    Toast(String),
    /// Blocking `alert()`.
    Alert(String),
    Navigate(String),
    NavigateAfter { url: String, delay_ms: u32 },
    /// Plain form POST to `/checkout` carrying only the token.
    SubmitCheckoutFallback { csrf_token: String },
    /// Submit `.product-delete-form[data-pid=pid]`.
    SubmitDeleteForm { pid: Pid },
}

impl Command {
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Command::PostAddToCart { .. }
                | Command::PostRemoveFromCart { .. }
                | Command::PostFavoriteToggle { .. }
                | Command::PostCheckout
                | Command::FetchProducts
                | Command::CreateProduct(_)
                | Command::DeleteProduct(_)
        )
    }
}
