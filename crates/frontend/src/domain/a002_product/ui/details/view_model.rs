use super::model::{self, BrowserDraft};
use crate::domain::a001_category::model::fetch_tree;
use crate::domain::a002_product::model::fetch_product;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::{CategorySelector, CategoryTree};
use contracts::domain::a002_product::{FormMode, ProductDraft, ProductType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ViewModel for the product form
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub mode: FormMode,
    pub id: Option<String>,
    pub draft: RwSignal<BrowserDraft, LocalStorage>,
    pub selector: RwSignal<CategorySelector>,
    pub tree: RwSignal<CategoryTree>,
    pub tag_input: RwSignal<String>,
    /// Object URL of a newly picked image
    pub preview: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    toast: ToastService,
    mounted: Arc<AtomicBool>,
}

impl ProductDetailsViewModel {
    pub fn new(id: Option<String>, store_id: Option<String>, toast: ToastService) -> Self {
        let mode = if id.is_some() { FormMode::Update } else { FormMode::Create };
        Self {
            mode,
            id,
            draft: RwSignal::new_local(ProductDraft::new(store_id)),
            selector: RwSignal::new(CategorySelector::new()),
            tree: RwSignal::new(CategoryTree::default()),
            tag_input: RwSignal::new(String::new()),
            preview: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            toast,
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.mode == FormMode::Update
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Relaxed)
    }

    /// Results arriving after this are dropped; also frees the preview URL
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Relaxed);
        if let Some(url) = self.preview.try_get_untracked().flatten() {
            model::revoke_preview(&url);
        }
    }

    /// Load the category tree and, in edit mode, the product
    pub fn load(&self) {
        let vm = self.clone();
        self.loading.set(true);
        spawn_local(async move {
            let tree = fetch_tree().await;
            if !vm.is_mounted() {
                return;
            }
            match tree {
                Ok(t) => vm.tree.set(t),
                Err(e) => vm.toast.error(e),
            }
            if let Some(id) = vm.id.clone() {
                vm.load_product(&id).await;
            }
            if vm.is_mounted() {
                vm.loading.set(false);
            }
        });
    }

    async fn load_product(&self, id: &str) {
        let product = fetch_product(id).await;
        if !self.is_mounted() {
            return;
        }
        match product {
            Ok(product) => {
                let draft = BrowserDraft::from_product(&product);
                let selector = self
                    .tree
                    .with_untracked(|t| CategorySelector::with_selection(t, &draft.category));
                self.selector.set(selector);
                self.draft.set(draft);
                self.revalidate_selection();
                self.clear_preview();
            }
            Err(e) => self.toast.error(e),
        }
    }

    /// Reload the tree and drop selections that no longer exist
    pub fn reload_categories(&self) {
        let vm = self.clone();
        spawn_local(async move {
            let tree = fetch_tree().await;
            if !vm.is_mounted() {
                return;
            }
            match tree {
                Ok(t) => {
                    vm.tree.set(t);
                    vm.revalidate_selection();
                }
                Err(e) => vm.toast.error(e),
            }
        });
    }

    fn revalidate_selection(&self) {
        let cleared = self
            .tree
            .with_untracked(|t| self.selector.try_update(|s| s.revalidate(t)))
            .unwrap_or(false);
        if cleared {
            self.toast
                .error("The selected category is no longer available, please choose again");
        }
    }

    /// Switch tab; the category chain is tied to the old type
    pub fn set_product_type(&self, product_type: ProductType) {
        let changed = self.draft.with_untracked(|d| d.product_type != product_type);
        if changed {
            self.draft.update(|d| d.set_product_type(product_type));
            self.selector.update(CategorySelector::reset);
        }
    }

    pub fn add_tags(&self) {
        let input = self.tag_input.get_untracked();
        if input.trim().is_empty() {
            return;
        }
        self.draft.update(|d| {
            d.tags.add(&input);
        });
        self.tag_input.set(String::new());
    }

    pub fn remove_tag(&self, index: usize) {
        self.draft.update(|d| {
            d.tags.remove(index);
        });
    }

    pub fn choose_image(&self, file: Option<web_sys::File>) {
        self.clear_preview();
        match file {
            Some(file) => {
                match model::preview_url(&file) {
                    Ok(url) => self.preview.set(Some(url)),
                    Err(e) => log::warn!("no preview for {}: {e:?}", file.name()),
                }
                self.draft.update(|d| d.main_image = Some(model::attachment(file)));
            }
            None => self.draft.update(|d| d.main_image = None),
        }
    }

    fn clear_preview(&self) {
        if let Some(url) = self.preview.get_untracked() {
            model::revoke_preview(&url);
            self.preview.set(None);
        }
    }

    /// Validate and send the form. At most one request per form is in flight.
    pub fn save_command(&self, on_created: Rc<dyn Fn(())>) {
        if self.saving.get_untracked() {
            return;
        }
        let selection = self.selector.with_untracked(|s| s.selection().clone());
        self.draft.update(|d| d.category = selection);

        let draft = self.draft.get_untracked();
        if let Err(e) = draft.validate(self.mode) {
            self.toast.error(e.to_string());
            return;
        }

        let payload = draft.serialize();
        let vm = self.clone();
        self.saving.set(true);
        spawn_local(async move {
            let result = model::save(vm.mode, vm.id.clone(), payload).await;
            if !vm.is_mounted() {
                return;
            }
            vm.saving.set(false);
            match (result, vm.mode) {
                (Ok(_), FormMode::Create) => {
                    vm.toast.success("Product created successfully");
                    on_created(());
                }
                (Ok(product), FormMode::Update) => {
                    vm.toast.success("Product updated successfully");
                    vm.load_product(&product.id).await;
                }
                (Err(e), _) => vm.toast.error(e),
            }
        });
    }
}
