use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::database::entities::studios;
use crate::services::image_store;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioDto {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub established_year: i32,
    pub ceo: String,
    pub headquarter: String,
    pub has_pic: bool,
    /// Derived URL path of the stored image, present only when `has_pic`.
    pub image_path: Option<String>,
}

impl From<studios::Model> for StudioDto {
    fn from(studio: studios::Model) -> Self {
        let image_path = match (studio.has_pic, studio.pic_extension.as_deref()) {
            (true, Some(extension)) => Some(image_store::public_image_path(studio.id, extension)),
            _ => None,
        };

        Self {
            id: studio.id,
            name: studio.name,
            country: studio.country,
            established_year: studio.established_year,
            ceo: studio.ceo,
            headquarter: studio.headquarter,
            has_pic: studio.has_pic,
            image_path,
        }
    }
}

impl StudioDto {
    /// Mapping for inserts. Image fields start unset; the store default
    /// leaves `has_pic` false until an image is uploaded.
    pub fn insert_model(&self) -> studios::ActiveModel {
        studios::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(self.name.clone()),
            country: Set(self.country.clone()),
            established_year: Set(self.established_year),
            ceo: Set(self.ceo.clone()),
            headquarter: Set(self.headquarter.clone()),
            has_pic: ActiveValue::NotSet,
            pic_extension: ActiveValue::NotSet,
        }
    }

    /// Mapping for whole-row updates. `has_pic` and `pic_extension` stay
    /// `NotSet`: they are owned by the image replace operation and a scalar
    /// update must never clear them.
    pub fn replace_model(&self) -> studios::ActiveModel {
        studios::ActiveModel {
            id: Set(self.id),
            ..self.insert_model()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> studios::Model {
        studios::Model {
            id: 3,
            name: "Toho".to_string(),
            country: "Japan".to_string(),
            established_year: 1932,
            ceo: "Hiroyasu Matsuoka".to_string(),
            headquarter: "Tokyo".to_string(),
            has_pic: false,
            pic_extension: None,
        }
    }

    #[test]
    fn studio_without_image_has_no_path() {
        let dto = StudioDto::from(sample_model());
        assert!(!dto.has_pic);
        assert_eq!(dto.image_path, None);
    }

    #[test]
    fn studio_with_image_derives_the_public_path() {
        let mut model = sample_model();
        model.has_pic = true;
        model.pic_extension = Some(".png".to_string());

        let dto = StudioDto::from(model);
        assert!(dto.has_pic);
        assert_eq!(dto.image_path.as_deref(), Some("/images/studios/3.png"));
    }

    #[test]
    fn update_mapping_never_touches_image_state() {
        let dto = StudioDto::from(sample_model());
        let active = dto.replace_model();
        assert_eq!(active.id, Set(3));
        assert_eq!(active.has_pic, ActiveValue::NotSet);
        assert_eq!(active.pic_extension, ActiveValue::NotSet);
    }
}
