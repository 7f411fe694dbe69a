use uuid::Uuid;

use ble_property_sheet::{
    gatt::{characteristic::Characteristic, service::Service},
    uuid::{ShortUuid, PROPERTY_DESCRIPTOR_UUID},
    PropertyBlock, PropertyEncoder, PropertyKind,
};

const SERVICE_UUID: u16 = 0x181A;

/// Settings exposed by an environmental sensor, one characteristic each.
const SETTINGS: &[(u16, &str, PropertyKind<'static>)] = &[
    (0xF001, "Fahrenheit", PropertyKind::Bool),
    (0xF002, "Update Period (s)", PropertyKind::Int { increment: 5 }),
    (0xF003, "Temperature Offset", PropertyKind::Float { increment: 0.1 }),
    (0xF004, "LED Brightness", PropertyKind::Range { min: 0, max: 100 }),
    (0xF005, "Pressure Units", PropertyKind::Select { options: "hPa|inHg|mmHg" }),
    (0xF006, "Device Name", PropertyKind::Text),
    (0xF007, "Install Date", PropertyKind::Date),
    (0xF008, "Report Time", PropertyKind::Time),
];

#[tokio::main]
async fn main() {
    std::env::set_var("RUST_LOG", "debug");
    if let Err(err) = pretty_env_logger::try_init() {
        eprintln!("WARNING: failed to initialize logging framework: {}", err);
    }

    let service = build_service();
    for characteristic in &service.characteristics {
        for descriptor in characteristic.descriptors_with(PROPERTY_DESCRIPTOR_UUID) {
            let value = descriptor.value.as_deref().unwrap_or_default();
            match PropertyBlock::parse(value) {
                Ok(block) => log::info!("{} {value:02x?} -> {block:?}", characteristic.uuid),
                Err(err) => log::error!("{} does not decode: {}", characteristic.uuid, err),
            }
        }
    }

    #[cfg(target_os = "linux")]
    if let Err(err) = serve().await {
        log::error!("Error serving property sheet: {}", err);
    }
}

fn build_service() -> Service {
    let mut service = Service {
        uuid: Uuid::from_short(SERVICE_UUID),
        characteristics: SETTINGS
            .iter()
            .map(|(uuid, _, _)| Characteristic {
                uuid: Uuid::from_short(*uuid),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };

    let mut encoder = PropertyEncoder::new();
    for (i, (uuid, name, kind)) in SETTINGS.iter().enumerate() {
        if i == 0 {
            encoder.add_title("Display");
        } else if i == 5 {
            encoder.add_title("Device");
        }
        if let Some(characteristic) = service.characteristic_mut(Uuid::from_short(*uuid)) {
            if let Err(err) = encoder.add(characteristic, name, *kind) {
                log::error!("Error adding property {name}: {}", err);
            }
        }
    }
    service
}

/// Publishes the same settings through BlueZ until enter is pressed.
#[cfg(target_os = "linux")]
async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    use bluer::{
        adv::Advertisement,
        gatt::local::{self, Application, CharacteristicRead, CharacteristicReadRequest, ReqError},
    };
    use futures::FutureExt;
    use std::io::{self, BufRead};

    let session = bluer::Session::new().await?;
    let adapter = session.default_adapter().await?;
    adapter.set_powered(true).await?;

    let mut encoder = PropertyEncoder::new();
    let mut characteristics = Vec::new();
    for (uuid, name, kind) in SETTINGS {
        let mut characteristic = local::Characteristic {
            uuid: Uuid::from_short(*uuid),
            read: Some(CharacteristicRead {
                read: true,
                fun: Box::new(|_request: CharacteristicReadRequest| {
                    async { Ok::<Vec<u8>, ReqError>(Vec::new()) }.boxed()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        encoder.add(&mut characteristic, name, *kind)?;
        characteristics.push(characteristic);
    }

    let service_uuid = Uuid::from_short(SERVICE_UUID);
    let _app_handle = adapter
        .serve_gatt_application(Application {
            services: vec![local::Service {
                uuid: service_uuid,
                primary: true,
                characteristics,
                ..Default::default()
            }],
            ..Default::default()
        })
        .await?;
    let _adv_handle = adapter
        .advertise(Advertisement {
            service_uuids: [service_uuid].into_iter().collect(),
            discoverable: Some(true),
            local_name: Some("EnvSensor".to_string()),
            ..Default::default()
        })
        .await?;
    log::info!(
        "Serving {} properties on {}, press enter to stop",
        SETTINGS.len(),
        adapter.name()
    );

    let mut lines = io::stdin().lock().lines();
    let _ = lines.next();
    Ok(())
}
