//! List View State for Catalog Admin
//!
//! This module holds the renderer-independent state of a resource list
//! screen: the fetched rows, the list phase, the inline error banner and the
//! add/edit modal. Every transition is a plain method so the whole screen
//! can be exercised without Dioxus.
//!
//! ```text
//! mount ──► Loading ──ok──► Ready ◄──┐
//!              │                      │ (re-fetch after every mutation)
//!              └─err──► Failed ───────┘
//!
//! modal:  Closed ──add──► Creating ──submit ok──► Closed
//!           │                                    ▲
//!           └──edit (get ok)──► Editing(id) ─────┘
//! ```

use catalog_core::{Category, CategoryForm, FormDraft, Product, ProductForm, RecordId};

// ============================================================================
// Resource
// ============================================================================

/// A record type shown in a list view
pub trait Resource: Clone + PartialEq + 'static {
    /// Draft backing the add/edit modal
    type Form: FormDraft<Record = Self>;

    /// Lowercase singular name ("category")
    const SINGULAR: &'static str;
    /// Lowercase plural name ("categories")
    const PLURAL: &'static str;

    /// Server-assigned identifier
    fn id(&self) -> RecordId;
}

impl Resource for Category {
    type Form = CategoryForm;
    const SINGULAR: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn id(&self) -> RecordId {
        self.id
    }
}

impl Resource for Product {
    type Form = ProductForm;
    const SINGULAR: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> RecordId {
        self.id
    }
}

// ============================================================================
// Errors
// ============================================================================

/// The operation a failure is attributed to
///
/// Failures are classified only by what the operator was doing; transport,
/// status and decode failures all collapse to the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Unfiltered list fetch
    FetchList,
    /// List fetch restricted to one category
    FetchFiltered,
    /// Create or update
    Save,
    /// get-by-id before opening the edit modal
    FetchForEdit,
    /// Delete
    Delete,
}

impl FailureKind {
    /// Static operator-facing message for this failure on resource `R`
    pub fn message<R: Resource>(self) -> String {
        match self {
            FailureKind::FetchList => format!("Failed to fetch {}", R::PLURAL),
            FailureKind::FetchFiltered => format!("Failed to fetch {} by category", R::PLURAL),
            FailureKind::Save => format!("Failed to save {}", R::SINGULAR),
            FailureKind::FetchForEdit => format!("Failed to fetch {} for edit", R::SINGULAR),
            FailureKind::Delete => format!("Failed to delete {}", R::SINGULAR),
        }
    }
}

/// Inline error banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewError {
    pub kind: FailureKind,
    pub message: String,
}

impl ViewError {
    pub fn new<R: Resource>(kind: FailureKind) -> Self {
        Self {
            kind,
            message: kind.message::<R>(),
        }
    }
}

// ============================================================================
// Modal
// ============================================================================

/// Add/edit modal sub-state, independent of the list phase
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState<F> {
    Closed,
    /// Empty form, no edit target
    Creating { form: F },
    /// Form pre-populated from get-by-id, keyed by the captured identifier
    Editing { id: RecordId, form: F },
}

impl<F> ModalState<F> {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Identifier being edited, `None` when closed or creating
    pub fn edit_target(&self) -> Option<RecordId> {
        match self {
            ModalState::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            ModalState::Closed => None,
            ModalState::Creating { form } | ModalState::Editing { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            ModalState::Closed => None,
            ModalState::Creating { form } | ModalState::Editing { form, .. } => Some(form),
        }
    }
}

/// What a submit should send, captured when the submit starts
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<F> {
    Create(F),
    Update { id: RecordId, form: F },
}

// ============================================================================
// List View
// ============================================================================

/// Phase of the list itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Identifies one list fetch; only the most recently issued one may apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// State of one resource list screen
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<R: Resource> {
    items: Vec<R>,
    phase: Phase,
    error: Option<ViewError>,
    modal: ModalState<R::Form>,
    issued: u64,
    saving: bool,
}

impl<R: Resource> Default for ListView<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Loading,
            error: None,
            modal: ModalState::Closed,
            issued: 0,
            saving: false,
        }
    }
}

impl<R: Resource> ListView<R> {
    /// New view, loading until the first fetch resolves
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in the order the service returned them
    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&ViewError> {
        self.error.as_ref()
    }

    pub fn modal(&self) -> &ModalState<R::Form> {
        &self.modal
    }

    /// Whether a create/update request is in flight
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    // ========================================================================
    // List transitions
    // ========================================================================

    /// Enter `Loading` and issue a ticket for the new fetch
    pub fn begin_fetch(&mut self) -> Ticket {
        self.issued += 1;
        self.phase = Phase::Loading;
        Ticket(self.issued)
    }

    /// Apply a fetch result
    ///
    /// Returns `false` (and changes nothing) when a newer fetch has been
    /// issued since `ticket`. A successful load clears any stale banner.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: Result<Vec<R>, FailureKind>) -> bool {
        if ticket.0 != self.issued {
            return false;
        }

        match result {
            Ok(items) => {
                self.items = items;
                self.phase = Phase::Ready;
                self.error = None;
            }
            Err(kind) => {
                self.phase = Phase::Failed;
                self.error = Some(ViewError::new::<R>(kind));
            }
        }
        true
    }

    /// Show the banner for a failure that does not affect the list phase
    pub fn fail(&mut self, kind: FailureKind) {
        self.error = Some(ViewError::new::<R>(kind));
    }

    /// Hide the banner
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ========================================================================
    // Modal transitions
    // ========================================================================

    /// Open the modal with an empty form and no edit target
    pub fn open_create(&mut self, form: R::Form) {
        self.modal = ModalState::Creating { form };
    }

    /// Open the modal pre-populated from `record`, keyed by `id`
    pub fn open_edit(&mut self, id: RecordId, record: &R) {
        self.modal = ModalState::Editing {
            id,
            form: R::Form::from_record(record),
        };
    }

    /// Close the modal and discard the form
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
        self.saving = false;
    }

    /// Edit the open form; no-op when the modal is closed
    pub fn update_form(&mut self, edit: impl FnOnce(&mut R::Form)) {
        if let Some(form) = self.modal.form_mut() {
            edit(form);
        }
    }

    /// Capture what to send and mark a save in flight
    ///
    /// Returns `None` when the modal is closed or a save is already running.
    pub fn begin_submit(&mut self) -> Option<Submission<R::Form>> {
        if self.saving {
            return None;
        }
        let submission = match &self.modal {
            ModalState::Closed => return None,
            ModalState::Creating { form } => Submission::Create(form.clone()),
            ModalState::Editing { id, form } => Submission::Update {
                id: *id,
                form: form.clone(),
            },
        };
        self.saving = true;
        Some(submission)
    }

    /// Settle a save: success closes the modal, failure keeps it open
    pub fn finish_submit(&mut self, ok: bool) {
        self.saving = false;
        if ok {
            self.modal = ModalState::Closed;
        } else {
            self.fail(FailureKind::Save);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Validatable;

    fn category(id: RecordId, name: &str) -> Category {
        Category {
            id,
            category_name: name.to_string(),
            category_description: format!("{name} description"),
            image_url: String::new(),
            is_active: true,
            created_date: "2024-01-01T00:00:00Z".to_string(),
            updated_date: None,
        }
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = ListView::<Category>::new();
        assert!(view.is_loading());
        assert!(view.items().is_empty());
        assert!(!view.modal().is_open());
        assert!(view.error().is_none());
    }

    #[test]
    fn test_fetch_success_keeps_server_order() {
        let mut view = ListView::<Category>::new();
        let ticket = view.begin_fetch();
        let applied = view.finish_fetch(ticket, Ok(vec![category(3, "C"), category(1, "A")]));

        assert!(applied);
        assert_eq!(view.phase(), Phase::Ready);
        let ids: Vec<_> = view.items().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_fetch_failure_leaves_loading() {
        let mut view = ListView::<Product>::new();
        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Err(FailureKind::FetchFiltered));

        assert_eq!(view.phase(), Phase::Failed);
        assert!(!view.is_loading());
        assert_eq!(
            view.error().unwrap().message,
            "Failed to fetch products by category"
        );
    }

    #[test]
    fn test_stale_ticket_is_discarded() {
        let mut view = ListView::<Category>::new();
        let first = view.begin_fetch();
        let second = view.begin_fetch();

        assert!(view.finish_fetch(second, Ok(vec![category(2, "New")])));
        assert!(!view.finish_fetch(first, Ok(vec![category(1, "Old")])));

        assert_eq!(view.items().len(), 1);
        assert_eq!(view.items()[0].category_name, "New");
    }

    #[test]
    fn test_successful_reload_clears_banner() {
        let mut view = ListView::<Category>::new();
        view.fail(FailureKind::Delete);
        assert_eq!(view.error().unwrap().message, "Failed to delete category");

        let ticket = view.begin_fetch();
        view.finish_fetch(ticket, Ok(vec![]));
        assert!(view.error().is_none());
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            FailureKind::FetchList.message::<Category>(),
            "Failed to fetch categories"
        );
        assert_eq!(FailureKind::Save.message::<Product>(), "Failed to save product");
        assert_eq!(
            FailureKind::FetchForEdit.message::<Category>(),
            "Failed to fetch category for edit"
        );
        assert_eq!(
            FailureKind::FetchForEdit.message::<Product>(),
            "Failed to fetch product for edit"
        );
    }

    #[test]
    fn test_create_submission_has_no_target() {
        let mut view = ListView::<Category>::new();
        view.open_create(CategoryForm::default());
        view.update_form(|f| f.name = "Tools".to_string());

        assert_eq!(view.modal().edit_target(), None);
        match view.begin_submit() {
            Some(Submission::Create(form)) => assert_eq!(form.name, "Tools"),
            other => panic!("unexpected submission: {other:?}"),
        }
        assert!(view.is_saving());
        assert!(view.begin_submit().is_none());
    }

    #[test]
    fn test_edit_submission_uses_captured_id() {
        let mut view = ListView::<Category>::new();
        view.open_edit(7, &category(7, "Tools"));
        view.update_form(|f| f.name = "Power tools".to_string());

        assert_eq!(view.modal().edit_target(), Some(7));
        match view.begin_submit() {
            Some(Submission::Update { id, form }) => {
                assert_eq!(id, 7);
                assert_eq!(form.name, "Power tools");
                assert!(form.is_valid());
            }
            other => panic!("unexpected submission: {other:?}"),
        }
    }

    #[test]
    fn test_failed_submit_keeps_modal_open() {
        let mut view = ListView::<Category>::new();
        view.open_create(CategoryForm::default());
        view.begin_submit();
        view.finish_submit(false);

        assert!(view.modal().is_open());
        assert!(!view.is_saving());
        assert_eq!(view.error().unwrap().kind, FailureKind::Save);

        view.begin_submit();
        view.finish_submit(true);
        assert!(!view.modal().is_open());
    }

    #[test]
    fn test_closed_modal_ignores_edits_and_submit() {
        let mut view = ListView::<Product>::new();
        view.update_form(|f| f.name = "ignored".to_string());
        assert!(view.modal().form().is_none());
        assert!(view.begin_submit().is_none());
    }

    #[test]
    fn test_close_modal_discards_form() {
        let mut view = ListView::<Product>::new();
        view.open_create(ProductForm::with_category(Some(2)));
        assert_eq!(view.modal().form().unwrap().category_id, Some(2));

        view.close_modal();
        assert_eq!(*view.modal(), ModalState::Closed);
    }
}
