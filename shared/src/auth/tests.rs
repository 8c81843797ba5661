use super::*;
use crate::error::SessionError;
use crate::session::{MemoryStorage, STORAGE_ROLE_KEY, STORAGE_TOKEN_KEY, Session};
use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

// =========================================================
// Mock gateway
// =========================================================

struct TestContext {
    /// Calls in arrival order
    log: RefCell<Vec<String>>,
    /// Canned answer for the next call
    reply: RefCell<AuthResult<TokenResponse>>,
}

impl TestContext {
    fn answering(reply: AuthResult<TokenResponse>) -> Rc<Self> {
        Rc::new(Self {
            log: RefCell::new(Vec::new()),
            reply: RefCell::new(reply),
        })
    }

    fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

struct TestGateway {
    ctx: Rc<TestContext>,
}

#[async_trait(?Send)]
impl AuthGateway for TestGateway {
    async fn login(&self, request: &LoginRequest) -> AuthResult<TokenResponse> {
        self.ctx.log.borrow_mut().push(format!("login:{}", request.email));
        self.ctx.reply.borrow().clone()
    }

    async fn signup(&self, request: &SignupRequest) -> AuthResult<TokenResponse> {
        self.ctx
            .log
            .borrow_mut()
            .push(format!("signup:{}", request.company_name));
        self.ctx.reply.borrow().clone()
    }
}

fn token(token: &str, role: Option<&str>) -> AuthResult<TokenResponse> {
    Ok(TokenResponse {
        token: token.to_string(),
        role: role.map(str::to_string),
    })
}

fn admin_login() -> LoginRequest {
    LoginRequest {
        email: "admin@blinkbuy.com".into(),
        password: "hunter22".into(),
    }
}

fn seller_form() -> SignupForm {
    SignupForm {
        request: SignupRequest {
            company_name: "TechTrendz".into(),
            company_address: "456 Tech Park".into(),
            company_pan_number: "ABCDE1234F".into(),
            email: "owner@techtrendz.com".into(),
            password: "s3cretpass".into(),
            confirm_password: "s3cretpass".into(),
            phone_number: "9800000000".into(),
        },
        agree_terms: true,
    }
}

type Harness = (
    TestGateway,
    Rc<TestContext>,
    SessionStore<Rc<MemoryStorage>>,
    Rc<MemoryStorage>,
);

fn setup(reply: AuthResult<TokenResponse>) -> Harness {
    let ctx = TestContext::answering(reply);
    let storage = Rc::new(MemoryStorage::new());
    let store = SessionStore::initialize(Rc::clone(&storage));
    (TestGateway { ctx: Rc::clone(&ctx) }, ctx, store, storage)
}

// =========================================================
// Login
// =========================================================

#[tokio::test]
async fn login_persists_token_and_role() {
    let (gateway, ctx, mut store, storage) = setup(token("tok-admin", Some("admin")));

    let role = login(&gateway, &mut store, &admin_login()).await.unwrap();

    assert_eq!(role, Some(Role::Admin));
    assert_eq!(ctx.calls(), vec!["login:admin@blinkbuy.com"]);
    assert!(store.session().is_authenticated());
    assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok-admin"));
    assert_eq!(storage.get(STORAGE_ROLE_KEY).as_deref(), Some("admin"));
}

#[tokio::test]
async fn invalid_form_never_reaches_the_gateway() {
    let (gateway, ctx, mut store, _) = setup(token("tok", Some("admin")));
    let request = LoginRequest {
        email: "admin".into(),
        password: "123".into(),
    };

    let err = login(&gateway, &mut store, &request).await.unwrap_err();

    assert!(matches!(err, AuthError::Validation(_)));
    assert!(ctx.calls().is_empty());
    assert_eq!(store.session(), &Session::anonymous());
}

#[tokio::test]
async fn rejected_login_leaves_session_untouched() {
    let (gateway, _, mut store, storage) = setup(Err(AuthError::Rejected {
        status: 401,
        message: None,
    }));
    store.set_session("old", Role::Seller).unwrap();

    let err = login(&gateway, &mut store, &admin_login()).await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid email or password");
    assert_eq!(store.session().token(), Some("old"));
    assert_eq!(storage.get(STORAGE_ROLE_KEY).as_deref(), Some("seller"));
}

#[tokio::test]
async fn token_only_login_signs_in_without_a_role() {
    let (gateway, _, mut store, storage) = setup(token("tok-plain", None));
    store.set_session("old", Role::Admin).unwrap();

    let role = login(&gateway, &mut store, &admin_login()).await.unwrap();

    assert_eq!(role, None);
    assert!(store.session().is_authenticated());
    assert_eq!(store.session().role(), None);
    assert_eq!(storage.get(STORAGE_TOKEN_KEY).as_deref(), Some("tok-plain"));
    assert_eq!(storage.get(STORAGE_ROLE_KEY), None);
}

#[tokio::test]
async fn login_with_unknown_role_is_an_invalid_response() {
    let (gateway, _, mut store, _) = setup(token("tok", Some("customer")));

    let err = login(&gateway, &mut store, &admin_login()).await.unwrap_err();

    assert!(matches!(err, AuthError::InvalidResponse(_)));
    assert!(!store.session().is_authenticated());
}

#[tokio::test]
async fn blank_token_surfaces_session_error() {
    let (gateway, _, mut store, storage) = setup(token("", Some("admin")));

    let err = login(&gateway, &mut store, &admin_login()).await.unwrap_err();

    assert_eq!(err, AuthError::Session(SessionError::EmptyToken));
    assert!(storage.is_empty());
}

// =========================================================
// Signup
// =========================================================

#[tokio::test]
async fn signup_defaults_to_seller() {
    let (gateway, ctx, mut store, _) = setup(token("tok-seller", None));

    let role = signup(&gateway, &mut store, &seller_form()).await.unwrap();

    assert_eq!(role, Role::Seller);
    assert_eq!(ctx.calls(), vec!["signup:TechTrendz"]);
    assert_eq!(store.session().role(), Some(Role::Seller));
}

#[tokio::test]
async fn signup_requires_accepted_terms() {
    let (gateway, ctx, mut store, _) = setup(token("tok", None));
    let mut form = seller_form();
    form.agree_terms = false;

    let err = signup(&gateway, &mut store, &form).await.unwrap_err();

    match err {
        AuthError::Validation(errors) => assert!(errors.for_field("agree_terms").is_some()),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(ctx.calls().is_empty());
}

#[tokio::test]
async fn transport_failure_is_reported() {
    let (gateway, _, mut store, _) = setup(Err(AuthError::Transport("connection refused".into())));

    let err = signup(&gateway, &mut store, &seller_form()).await.unwrap_err();

    assert_eq!(err.user_message(), "Could not reach the server. Try again later.");
    assert!(!store.session().is_authenticated());
}

// =========================================================
// Logout and wire format
// =========================================================

#[tokio::test]
async fn logout_after_login_clears_storage() {
    let (gateway, _, mut store, storage) = setup(token("tok", Some("seller")));
    login(&gateway, &mut store, &admin_login()).await.unwrap();

    logout(&mut store);
    logout(&mut store);

    assert!(storage.is_empty());
    assert_eq!(store.session(), &Session::anonymous());
}

#[test]
fn signup_body_uses_snake_case_keys() {
    let body = serde_json::to_value(&seller_form().request).unwrap();
    assert_eq!(body["company_pan_number"], "ABCDE1234F");
    assert_eq!(body["phone_number"], "9800000000");
    assert!(body.get("agree_terms").is_none());
}

#[test]
fn token_response_role_is_optional() {
    let parsed: TokenResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(parsed.token, "abc");
    assert_eq!(parsed.role, None);
}
