use super::draft::ProductDraft;
use contracts::domain::a002_product::ProductCreateRequest;
use std::future::Future;

/// Ошибка конвейера отправки
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// Запрос не прошёл предотправочную проверку; сеть не трогали
    Validation(String),
    /// Коллаборатор отклонил запрос или недоступен; черновик сохраняется
    Failed(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Validation(msg) => write!(f, "{}", msg),
            SubmitError::Failed(msg) => write!(f, "{}", msg),
        }
    }
}

/// Конвейер отправки: проверка, затем ровно один вызов коллаборатора.
///
/// Повторов нет: одна попытка на одно действие пользователя. Текст ошибки
/// коллаборатора передаётся наружу дословно.
pub async fn submit_product<F, Fut>(
    request: ProductCreateRequest,
    send: F,
) -> Result<String, SubmitError>
where
    F: FnOnce(ProductCreateRequest) -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    if let Err(msg) = request.validate() {
        return Err(SubmitError::Validation(msg));
    }
    send(request).await.map_err(SubmitError::Failed)
}

/// Итог отправки для черновика: успех уничтожает черновик (форма пустая),
/// любая ошибка оставляет его без изменений для исправления и повтора.
pub fn settle_draft(draft: &mut ProductDraft, outcome: &Result<String, SubmitError>) {
    if outcome.is_ok() {
        *draft = ProductDraft::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn block_on<F: Future>(fut: F) -> F::Output {
        use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

        fn noop(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            RawWaker::new(std::ptr::null(), &VTABLE)
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);

        let waker = unsafe { Waker::from_raw(RawWaker::new(std::ptr::null(), &VTABLE)) };
        let mut cx = Context::from_waker(&waker);
        let mut fut = std::pin::pin!(fut);
        loop {
            // тестовые futures не ждут внешних событий
            if let Poll::Ready(value) = fut.as_mut().poll(&mut cx) {
                return value;
            }
        }
    }

    fn request(name: &str, price: &str) -> ProductCreateRequest {
        let mut draft = super::super::draft::ProductDraft::new();
        draft.name = name.to_string();
        draft.price = price.to_string();
        draft.to_request()
    }

    #[test]
    fn test_happy_path_calls_collaborator_once() {
        let calls = Cell::new(0u32);
        let result = block_on(submit_product(request("Red Shoe", "19.99"), |_req| {
            calls.set(calls.get() + 1);
            async { Ok("p1".to_string()) }
        }));
        assert_eq!(result, Ok("p1".to_string()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_collaborator_receives_flattened_request() {
        use contracts::domain::common::ReferenceEntity;

        let mut draft = super::super::draft::ProductDraft::new();
        draft.name = "Red Shoe".to_string();
        draft.price = "19.99".to_string();
        draft.selection.select_category("cat1");
        draft.add_color(ReferenceEntity::new("c1", "Красный"));

        let seen = RefCell::new(None);
        let result = block_on(submit_product(draft.to_request(), |req| {
            *seen.borrow_mut() = Some(req);
            async { Ok("p1".to_string()) }
        }));
        assert!(result.is_ok());

        let req = seen.borrow().clone().unwrap();
        assert_eq!(req.name, "Red Shoe");
        assert_eq!(req.price, "19.99");
        assert_eq!(req.category.as_deref(), Some("cat1"));
        assert_eq!(req.colors, vec!["c1".to_string()]);
        assert!(req.attributes.is_empty());
    }

    #[test]
    fn test_invalid_request_never_reaches_collaborator() {
        let calls = Cell::new(0u32);
        let result = block_on(submit_product(request("", "19.99"), |_req| {
            calls.set(calls.get() + 1);
            async { Ok("p1".to_string()) }
        }));
        assert_eq!(
            result,
            Err(SubmitError::Validation(
                "Наименование обязательно для заполнения".to_string()
            ))
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_draft_resets_to_defaults_after_success() {
        use contracts::domain::common::ReferenceEntity;

        let mut draft = super::super::draft::ProductDraft::new();
        draft.name = "Red Shoe".to_string();
        draft.price = "19.99".to_string();
        draft.selection.select_category("cat1");
        draft.add_color(ReferenceEntity::new("c1", "Красный"));

        let outcome = block_on(submit_product(draft.to_request(), |_req| async {
            Ok("p1".to_string())
        }));
        settle_draft(&mut draft, &outcome);
        assert_eq!(draft, super::super::draft::ProductDraft::new());
    }

    #[test]
    fn test_draft_kept_intact_after_failure() {
        let mut draft = super::super::draft::ProductDraft::new();
        draft.name = "Red Shoe".to_string();
        draft.price = "19.99".to_string();
        let before = draft.clone();

        let outcome = block_on(submit_product(draft.to_request(), |_req| async {
            Err("SKU уже существует".to_string())
        }));
        settle_draft(&mut draft, &outcome);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_draft_kept_intact_after_validation_error() {
        let mut draft = super::super::draft::ProductDraft::new();
        draft.price = "19.99".to_string();
        let before = draft.clone();

        let outcome = block_on(submit_product(draft.to_request(), |_req| async {
            Ok("p1".to_string())
        }));
        assert!(matches!(outcome, Err(SubmitError::Validation(_))));
        settle_draft(&mut draft, &outcome);
        assert_eq!(draft, before);
    }

    #[test]
    fn test_failure_is_passed_through_verbatim() {
        let result = block_on(submit_product(request("Red Shoe", "19.99"), |_req| async {
            Err("SKU уже существует".to_string())
        }));
        assert_eq!(
            result,
            Err(SubmitError::Failed("SKU уже существует".to_string()))
        );
    }
}
