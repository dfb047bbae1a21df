//! Constants for the storefront frontend
//!
//! Element ids, CSS classes, endpoints and user-facing copy live here so the
//! server-rendered templates and the wasm handlers agree on one spelling.

// Element IDs
pub const ID_CART_COUNT: &str = "cart-count";
pub const ID_SUBTOTAL: &str = "subtotal";
pub const ID_TOTAL: &str = "total";
pub const ID_SEARCH_BUTTON: &str = "buscar-btn";
pub const ID_SEARCH_INPUT: &str = "buscar-input";
pub const ID_CHECKOUT_BUTTON: &str = "checkoutBtn";
pub const ID_TOAST_CONTAINER: &str = "toast-container";
pub const ID_DELETE_MODAL: &str = "deleteModal";
pub const ID_CANCEL_DELETE: &str = "cancelDelete";
pub const ID_CONFIRM_DELETE: &str = "confirmDelete";
pub const ID_PRODUCT_LIST: &str = "backbone-products";
pub const ID_FORM_TITLE: &str = "bp-title";
pub const ID_FORM_PRICE: &str = "bp-price";
pub const ID_FORM_IMG: &str = "bp-img";
pub const ID_FORM_ADD: &str = "bp-add";

// Selectors
pub const SEL_ADD_TO_CART: &str = ".btn_carrito";
pub const SEL_FAVORITE: &str = ".btn_fav";
pub const SEL_REMOVE_FROM_CART: &str = ".btn_eliminar";
pub const SEL_CART_LINE: &str = ".producto";
pub const SEL_CART_LINES_CONTAINER: &str = ".productos";
pub const SEL_MODAL_CLOSE: &str = ".modal-close";
pub const SEL_DELETE_TRIGGER: &str = ".delete-trigger";
pub const SEL_DELETE_FORM: &str = ".product-delete-form";
pub const SEL_PRICE_FIELD: &str = "[name=\"price\"]";
pub const SEL_CSRF_META: &str = "meta[name=\"csrf-token\"]";
pub const SEL_API_BASE_META: &str = "meta[name=\"api-base-url\"]";
pub const SEL_PRODUCT_DELETE_BUTTON: &str = ".delete-btn";
/// Any of these marks the page as the payment screen.
pub const PAYMENT_FORM_MARKERS: [&str; 3] =
    [".datos_bancarios_2", ".payment-container", "#titular_tarjeta"];

// Attributes
pub const ATTR_PID: &str = "data-pid";
pub const ATTR_SUBTOTAL: &str = "data-subtotal";
pub const ATTR_PRODUCT_ID: &str = "data-id";

// CSS Class Names
pub const CSS_ADDED: &str = "added";
pub const CSS_FAV_ACTIVE: &str = "fav-active";
pub const CSS_LOADING: &str = "loading";
pub const CSS_PRODUCT_VIEW: &str = "producto backbone-producto";

// Endpoints
pub const PATH_CART_ADD: &str = "/cart/add";
pub const PATH_CART_REMOVE: &str = "/cart/remove";
pub const PATH_FAVORITES_TOGGLE: &str = "/favorites/toggle";
pub const PATH_CHECKOUT: &str = "/checkout";
pub const PATH_PRODUCTS: &str = "/api/products";
pub const PATH_PAYMENT_PAGE: &str = "/pagar";
pub const PATH_HOME: &str = "/";

// Headers
pub const HEADER_CSRF: &str = "X-CSRF-Token";
pub const HEADER_REQUEST_ID: &str = "X-Request-Id";

// Timings (milliseconds)
pub const TOAST_TIMEOUT_MS: u32 = 3000;
pub const TOAST_FADE_MS: u32 = 400;
pub const ADDED_FLASH_MS: u32 = 800;
pub const CHECKOUT_REDIRECT_DELAY_MS: u32 = 800;

// Default Values
pub const PLACEHOLDER_IMAGE: &str = "/static/img/Imagenes/placeholder.svg";
pub const EMPTY_CART_HTML: &str = "<p>No hay productos en el carrito.</p>";

// User-facing copy
pub const MSG_ADDED_TO_CART: &str = "Añadido al carrito";
pub const MSG_ADD_REJECTED: &str = "No se pudo añadir al carrito";
pub const MSG_ADD_FAILED: &str = "Error agregando al carrito";
pub const MSG_REMOVED_FROM_CART: &str = "Producto eliminado";
pub const MSG_REMOVE_REJECTED: &str = "No se pudo eliminar el producto";
pub const MSG_REMOVE_FAILED: &str = "Error eliminando";
pub const MSG_FAVORITE_ADDED: &str = "Añadido a favoritos";
pub const MSG_FAVORITE_REMOVED: &str = "Eliminado de favoritos";
pub const MSG_FAVORITE_REJECTED: &str = "No se pudo actualizar favoritos";
pub const MSG_FAVORITE_FAILED: &str = "Error actualizando favoritos";
pub const MSG_CHECKOUT_PROCESSING: &str = "Procesando pago...";
pub const MSG_CHECKOUT_PLACED: &str = "Pedido creado";
pub const MSG_CHECKOUT_NON_JSON: &str = "Respuesta recibida — intentando completar pago...";
pub const MSG_CHECKOUT_UNRECOGNIZED: &str = "Error creando el pedido";
pub const MSG_CHECKOUT_NETWORK: &str = "Error en checkout — intentando por formulario";
pub const MSG_INVALID_PRICE: &str =
    "Por favor ingresa un precio válido (número mayor o igual a 0).";
pub const MSG_CONFIRM_PRODUCT_DELETE: &str = "Eliminar este producto?";
pub const MSG_PRODUCT_DELETE_FAILED: &str = "No se pudo eliminar el producto.";
pub const MSG_TITLE_REQUIRED: &str = "Título requerido";
pub const MSG_PRODUCT_CREATE_FAILED: &str = "Error al crear el producto";
pub const MSG_PRODUCTS_LOAD_FAILED: &str = "No se pudieron cargar los productos";
