/// Default base URL of the Firstrade web interface
pub const DEFAULT_BASE_URL: &str = "https://invest.firstrade.com";
/// Default file used to persist the session cookie jar
pub const DEFAULT_COOKIE_FILE: &str = "ft_cookies.json";
/// Substring present in a session probe response when the session is not authenticated
pub const SESSION_FAILED_MARKER: &str = "/cgi-bin/sessionfailed?reason=6";
/// Browser user agent sent with every request; the site rejects obvious bots
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
/// Marker preceding the order id in a live order confirmation
pub const LIVE_ORDER_ID_MARKER: &str = "Your order reference number is: ";
/// Terminator of the live order id
pub const LIVE_ORDER_ID_END: &str = "</div>";
/// Marker preceding the order id in a preview confirmation
pub const PREVIEW_ORDER_ID_MARKER: &str = "id=\"";
/// Terminator of the preview order id
pub const PREVIEW_ORDER_ID_END: &str = "\" style=";
/// Value of `<success>` that marks a rejected order
pub const ORDER_REJECTED: &str = "No";
