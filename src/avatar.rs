use crate::constants::*;
use crate::dom;
use crate::style;
use folio_core::{AnchorRect, RenderParams};
use web_sys as web;

/// Handles to the avatar's animated parts.
#[derive(Clone)]
pub struct AvatarElements {
    root: web::Element,
    face: web::HtmlElement,
    eyes: web::HtmlElement,
    left_eye: web::Element,
    right_eye: web::Element,
    pupils: [web::HtmlElement; 2],
    eyebrows: [web::HtmlElement; 2],
    smile: web::HtmlElement,
}

impl AvatarElements {
    pub fn query(document: &web::Document) -> anyhow::Result<Self> {
        let root = dom::query(document, AVATAR_SELECTOR)?;
        let face = dom::html(dom::query(document, FACE_SELECTOR)?)?;
        let eyes = dom::html(dom::query(document, EYES_SELECTOR)?)?;
        let left_eye = dom::query(document, LEFT_EYE_SELECTOR)?;
        let right_eye = dom::query(document, RIGHT_EYE_SELECTOR)?;
        let pupils = [
            dom::html(dom::query_in(&left_eye, PUPIL_SELECTOR)?)?,
            dom::html(dom::query_in(&right_eye, PUPIL_SELECTOR)?)?,
        ];
        let eyebrows = [
            dom::html(dom::query_in(&left_eye, EYEBROW_SELECTOR)?)?,
            dom::html(dom::query_in(&right_eye, EYEBROW_SELECTOR)?)?,
        ];
        let smile = dom::html(dom::query(document, SMILE_SELECTOR)?)?;
        Ok(Self {
            root,
            face,
            eyes,
            left_eye,
            right_eye,
            pupils,
            eyebrows,
            smile,
        })
    }

    pub fn anchor(&self) -> AnchorRect {
        dom::element_rect(&self.root)
    }

    /// Write one frame's pose into the DOM.
    pub fn apply(&self, params: &RenderParams) {
        let pupil = style::pupil_transform(params.pupil_offset);
        for p in &self.pupils {
            dom::set_style(p, "transform", &pupil);
        }

        let brows = &params.eyebrows;
        dom::set_style(
            &self.eyebrows[0],
            "transform",
            &style::eyebrow_transform(brows.raise_px, brows.left_rotation_deg),
        );
        dom::set_style(
            &self.eyebrows[1],
            "transform",
            &style::eyebrow_transform(brows.raise_px, brows.right_rotation_deg),
        );

        dom::set_class(&self.left_eye, SQUINT_CLASS, params.squint);
        dom::set_class(&self.right_eye, SQUINT_CLASS, params.squint);
        dom::set_style(&self.eyes, "transform", &style::eyes_transform(params.eye_scale_y));
        dom::set_style(&self.face, "transform", &style::head_transform(&params.head));

        let smile = &params.smile;
        dom::set_style(&self.smile, "width", &style::smile_width(smile.width_px));
        dom::set_style(
            &self.smile,
            "border-radius",
            &style::smile_border_radius(smile.curve_pct),
        );
        dom::set_style(
            &self.smile,
            "border-bottom",
            &style::smile_border_bottom(smile.thickness_px, smile.hover_ink),
        );
        dom::set_class(&self.smile, WIDE_CLASS, smile.wide);
    }
}
