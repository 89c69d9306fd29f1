//! Form extraction.
//!
//! Each `<form>` becomes a [`FormRecord`] whose fields are its `input`,
//! `textarea`, `select` and `button` descendants in document order. Hidden,
//! disabled and read-only controls are kept and flagged.

use crate::category::Category;
use crate::cleaning::{clean_class_list, clean_text, title_case};
use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::patterns::FORM_CONTROL_SELECTOR;
use crate::records::{FieldElement, FormField, FormRecord, SelectOption};

use super::{check_depth, Harvest};

/// Value reported for a submit input that has none.
const DEFAULT_SUBMIT_VALUE: &str = "Submit";

/// Every form on the page.
///
/// A form nested too deeply is skipped as a whole. A control nested too
/// deeply is dropped from its form and logged under the form's index.
#[must_use]
pub fn extract_forms(page: &Page, opts: &Options) -> Harvest<FormRecord> {
    let mut harvest = Harvest::new(Category::Forms);

    for (idx, node) in page.select("form").nodes().iter().enumerate() {
        let form = Selection::from(*node);
        if let Err(e) = check_depth(&form, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        let mut fields = Vec::new();
        for control_node in form.select(FORM_CONTROL_SELECTOR).nodes() {
            let control = Selection::from(*control_node);
            if let Err(e) = check_depth(&control, opts) {
                harvest.skip(idx, &e);
                continue;
            }
            if let Some(field) = read_field(&form, &control) {
                fields.push(field);
            }
        }
        let fields = drop_shadowed_submits(fields);

        harvest.push(read_form(page, &form, idx + 1).with_fields(fields));
    }

    harvest
}

fn read_form(page: &Page, form: &Selection, form_number: usize) -> FormRecord {
    let method = dom::get_attribute(form, "method")
        .map(|m| m.trim().to_ascii_uppercase())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "GET".to_string());

    FormRecord {
        form_number,
        form_id: dom::attr_or_empty(form, "id"),
        form_name: dom::attr_or_empty(form, "name"),
        form_class: clean_class_list(&dom::attr_or_empty(form, "class")),
        action: page.resolve(&dom::attr_or_empty(form, "action")),
        method,
        enctype: dom::attr_or_empty(form, "enctype"),
        autocomplete: dom::attr_or_empty(form, "autocomplete"),
        target: dom::attr_or_empty(form, "target"),
        fields: Vec::new(),
        total_fields: 0,
        hidden_fields: 0,
        required_fields: 0,
        disabled_fields: 0,
    }
}

fn read_field(form: &Selection, control: &Selection) -> Option<FormField> {
    let element_type = match dom::tag_name(control)?.to_ascii_lowercase().as_str() {
        "input" => FieldElement::Input,
        "textarea" => FieldElement::Textarea,
        "select" => FieldElement::Select,
        "button" => FieldElement::Button,
        _ => return None,
    };
    let attr = |name: &str| dom::attr_or_empty(control, name);
    let flag = |name: &str| dom::has_attribute(control, name);

    let input_type = match element_type {
        FieldElement::Input | FieldElement::Button => attr("type").trim().to_ascii_lowercase(),
        FieldElement::Textarea => "textarea".to_string(),
        FieldElement::Select => "select".to_string(),
    };
    let input_type = match (element_type, input_type.is_empty()) {
        (FieldElement::Input, true) => "text".to_string(),
        (FieldElement::Button, true) => "button".to_string(),
        _ => input_type,
    };

    let value = match element_type {
        FieldElement::Textarea => clean_text(&dom::text_content(control)),
        FieldElement::Input if input_type == "submit" && !flag("value") => DEFAULT_SUBMIT_VALUE.to_string(),
        _ => clean_text(&attr("value")),
    };
    let text = if element_type == FieldElement::Button {
        clean_text(&dom::text_content(control))
    } else {
        String::new()
    };
    let options = if element_type == FieldElement::Select {
        select_options(control)
    } else {
        Vec::new()
    };

    Some(FormField {
        position: 0,
        element_type,
        hidden: flag("hidden") || input_type == "hidden",
        input_type,
        name: attr("name"),
        id: attr("id"),
        label: find_label(form, control),
        value,
        placeholder: clean_text(&attr("placeholder")),
        required: flag("required"),
        disabled: flag("disabled"),
        readonly: flag("readonly"),
        checked: flag("checked"),
        multiple: flag("multiple"),
        min: attr("min"),
        max: attr("max"),
        maxlength: attr("maxlength"),
        pattern: attr("pattern"),
        rows: attr("rows"),
        cols: attr("cols"),
        size: attr("size"),
        options,
        class: clean_class_list(&attr("class")),
        aria_label: clean_text(&attr("aria-label")),
        text,
        data_attributes: dom::data_attributes(control)
            .into_iter()
            .map(|(name, value)| (name, clean_text(&value)))
            .collect(),
    })
}

fn select_options(select: &Selection) -> Vec<SelectOption> {
    select
        .select("option")
        .nodes()
        .iter()
        .map(|n| {
            let option = Selection::from(*n);
            SelectOption {
                value: dom::attr_or_empty(&option, "value"),
                text: clean_text(&dom::text_content(&option)),
                selected: dom::has_attribute(&option, "selected"),
                disabled: dom::has_attribute(&option, "disabled"),
            }
        })
        .collect()
}

/// Drop submit inputs that repeat a `<button>` of the same form, then number
/// the remaining fields.
fn drop_shadowed_submits(fields: Vec<FormField>) -> Vec<FormField> {
    let button_keys: Vec<(String, String)> = fields
        .iter()
        .filter(|f| f.element_type == FieldElement::Button)
        .filter(|f| !(f.id.is_empty() && f.name.is_empty()))
        .map(|f| (f.id.clone(), f.name.clone()))
        .collect();

    fields
        .into_iter()
        .filter(|f| {
            let is_submit = f.element_type == FieldElement::Input && f.input_type == "submit";
            !(is_submit && button_keys.iter().any(|(id, name)| *id == f.id && *name == f.name))
        })
        .enumerate()
        .map(|(i, mut f)| {
            f.position = i + 1;
            f
        })
        .collect()
}

/// Human-readable label of a control.
///
/// Tries, in order: a `<label for=id>` inside the form, an enclosing
/// `<label>`, a `<label>` immediately before the control, `aria-label`,
/// `placeholder`, then the title-cased `name`.
#[must_use]
pub fn find_label(form: &Selection, control: &Selection) -> String {
    let id = dom::attr_or_empty(control, "id");
    if !id.is_empty() {
        let target = form
            .select("label[for]")
            .nodes()
            .iter()
            .map(|n| Selection::from(*n))
            .find(|label| dom::attr_or_empty(label, "for") == id);
        if let Some(label) = target {
            return clean_text(&dom::text_content(&label));
        }
    }

    if let Some(label) = dom::closest_ancestor(control, "label", Some("form")) {
        return clean_text(&dom::text_content(&label));
    }

    if let Some(prev) = dom::previous_element_sibling(control).filter(|s| dom::is_tag(s, "label")) {
        return clean_text(&dom::text_content(&prev));
    }

    for attr in ["aria-label", "placeholder"] {
        let value = clean_text(&dom::attr_or_empty(control, attr));
        if !value.is_empty() {
            return value;
        }
    }

    title_case(&dom::attr_or_empty(control, "name"))
}
